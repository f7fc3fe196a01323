//! Static VEX knowledge catalog.
//!
//! Competition levels, resources, help topics, and the two current game-rule
//! documents. Content is fixed at compile time; updating it means shipping a
//! new build, not a runtime operation. Unknown keys return `None`, never an
//! error.

use serde::Serialize;

/// One competition program level (VEX GO through VEX U).
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionLevel {
    pub name: &'static str,
    pub age_range: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_game: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_description: Option<&'static str>,
}

/// An official resource link.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// A help topic record returned by the info lookups.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TopicInfo {
    pub title: &'static str,
    pub content: &'static str,
}

const COMPETITION_LEVELS: &[CompetitionLevel] = &[
    CompetitionLevel {
        name: "VEX GO",
        age_range: "Ages 8-11 / Grades 4-6",
        description: "Basic introduction to robotics with snap-together components. Four progressive missions: Ocean Science, Mars Math, City Technology, Village Engineering. Simple programming using VEX GO kits.",
        current_game: None,
        game_description: None,
    },
    CompetitionLevel {
        name: "VEX IQ",
        age_range: "Elementary & Middle School",
        description: "Competition for elementary and middle school students using VEX IQ robots.",
        current_game: Some("Mix & Match"),
        game_description: Some("2025-26 game played on 6' x 8' rectangular field with 60-second teamwork matches + individual skills challenges. Uses Pins and Beams as scoring objects."),
    },
    CompetitionLevel {
        name: "VEX V5",
        age_range: "Middle & High School",
        description: "Premier competition for middle and high school students using VEX V5 robots.",
        current_game: Some("Push Back"),
        game_description: Some("2025-26 game played on 12' x 12' square field with 88 blocks. 15-second autonomous + 1:45 driver-controlled periods. Teams score blocks in goals and park robots."),
    },
    CompetitionLevel {
        name: "VEX U",
        age_range: "College/University",
        description: "Similar to V5 but with enhanced customization. 30-second autonomous + 1:30 driver control. Teams can use 3D printing, raw materials, larger robots.",
        current_game: None,
        game_description: None,
    },
];

const RESOURCES: &[Resource] = &[
    Resource {
        title: "VEXcode Programming Environment",
        url: "https://www.vexrobotics.com/vexcode",
        description: "Free programming environment for all VEX platforms with visual blocks and text coding",
        category: "Programming",
    },
    Resource {
        title: "VEX Library Documentation",
        url: "https://kb.vex.com",
        description: "Comprehensive documentation, tutorials, and support resources",
        category: "Documentation",
    },
    Resource {
        title: "RobotEvents Tournament Registration",
        url: "https://www.robotevents.com",
        description: "Register teams and find tournaments worldwide",
        category: "Competitions",
    },
    Resource {
        title: "VEX Forum Community",
        url: "https://www.vexforum.com",
        description: "Community discussion, Q&A, and official rule clarifications",
        category: "Community",
    },
    Resource {
        title: "V5 Push Back Game Manual",
        url: "https://content.vexrobotics.com/docs/25-26/v5rc-push-back/docs/PushBack-GameManual-0.1.pdf",
        description: "Official game manual for 2025-26 V5 competition",
        category: "Rules",
    },
    Resource {
        title: "VEX IQ Mix & Match Manual",
        url: "https://www.vexrobotics.com/mix-and-match-manual",
        description: "Official game manual for 2025-26 VEX IQ competition",
        category: "Rules",
    },
    Resource {
        title: "Free CS Curriculum",
        url: "https://cs.vex.com",
        description: "Free computer science curriculum and activities",
        category: "Education",
    },
    Resource {
        title: "Carnegie Mellon VEX Curriculum",
        url: "https://www.cmu.edu/roboticsacademy/roboticscurriculum/VEX%20Curriculum/",
        description: "Professional development and curriculum resources",
        category: "Education",
    },
];

const PROGRAMMING_GETTING_STARTED: TopicInfo = TopicInfo {
    title: "Getting Started with VEX Programming",
    content: r"VEXcode is the primary programming environment for all VEX platforms:

**Beginner Path:**
1. **Blocks Programming** - Visual drag-and-drop interface, perfect for beginners
2. **VEXcode VR** - Practice with virtual robots without hardware
3. **Python** - Text-based programming (recommended over C++ for beginners)
4. **C++** - Advanced text programming

**Key Features:**
- Built-in tutorials (TUTORIALS button)
- Help documentation (HELP button)
- Consistent interface across VEX platforms
- Free download for all platforms

**Learning Resources:**
- cs.vex.com - Free curriculum
- Carnegie Mellon tutorials
- VEX STEM Labs
- Built-in VEXcode examples",
};

const PROGRAMMING_TROUBLESHOOTING: TopicInfo = TopicInfo {
    title: "Common VEX Programming Issues",
    content: r"**Common Issues & Solutions:**

1. **Robot won't move:**
   - Check battery charge
   - Verify motor connections
   - Ensure proper port configuration in code

2. **Code won't download:**
   - Check USB/wireless connection
   - Restart VEXcode software
   - Update robot firmware

3. **Sensors not working:**
   - Verify sensor connections and ports
   - Check sensor configuration in code
   - Test sensors individually

4. **Chrome Apps discontinued:**
   - Switch to web-based VEXcode on Chrome browsers
   - All documentation available in VEX Library",
};

const COMPETITION_REGISTRATION: TopicInfo = TopicInfo {
    title: "VEX Competition Registration",
    content: r"**Team Registration Process:**
1. Register teams on RobotEvents.com
2. Upload school/non-profit documentation for verification
3. Registration deadline: December 19, 2025 for World Championship spots
4. Teams with 90+ day overdue payments cannot register for events

**Competition Structure:**
- Local Qualifying Events throughout season
- Regional Championships (earn spots to Worlds)
- World Championship: April 2026 in St. Louis, Missouri

**Important Dates 2025-26:**
- June 5, 2025: Minor manual updates
- June 26, 2025: Version 1.0 manual updates
- December 19, 2025: Team registration deadline
- February 22, 2026: Last qualifying events for Worlds",
};

const COMPETITION_TOURNAMENTS: TopicInfo = TopicInfo {
    title: "Tournament Format",
    content: r"**Match Structure:**
- **V5**: 15-second autonomous + 1:45 driver control
- **VEX IQ**: 60-second collaborative matches
- Teams play 5-8 qualification matches per tournament
- Random alliance pairings throughout event

**Skills Challenges:**
- **Driver Skills**: 1-minute solo matches
- **Autonomous Skills**: Fully programmed runs
- Skills scores used for rankings and tiebreakers

**Advancement:**
- Championship Tournament winners advance to Worlds
- Robot Skills Champions also qualify
- Signature Events must have 16+ teams to award spots",
};

const GAME_MANUAL_V5_PUSH_BACK: TopicInfo = TopicInfo {
    title: "V5 Push Back Game Manual",
    content: r#"**Push Back (2025-26 V5 Robotics Competition)**

**Field:** 12' x 12' square field with 88 Blocks as scoring objects, four
Goals (two Long Goals, two Center Goals), two Park Zones, and two Loaders.

**Match Structure:**
- 15-second autonomous period
- 1:45 driver-controlled period
- Two-team alliances, red vs. blue

**Scoring:**
- Each Block scored in a Goal: 3 points
- Controlling a Zone within a Long Goal: 10 points
- Controlling a Center Goal level: 8-10 points
- Autonomous bonus to the alliance scoring more points in autonomous: 10 points
- Parking one robot at match end: 8 points; both robots: 30 points

**Key Rules:**
- Robots start the match no larger than 18" x 18" x 18"
- Blocks may be introduced through Loaders during the match
- Contact with the opposing Park Zone during the endgame is restricted

Refer to the official manual PDF for the complete rule set and updates:
https://content.vexrobotics.com/docs/25-26/v5rc-push-back/docs/PushBack-GameManual-0.1.pdf"#,
};

const GAME_MANUAL_IQ_MIX_MATCH: TopicInfo = TopicInfo {
    title: "VEX IQ Mix & Match Game Manual",
    content: r#"**Mix & Match (2025-26 VEX IQ Robotics Competition)**

**Field:** 6' x 8' rectangular field with Pins and Beams as scoring objects
and two Goals with Starting Pins.

**Match Structure:**
- 60-second teamwork matches with two-robot alliances
- Individual Driving Skills and Autonomous Coding Skills matches

**Scoring:**
- Each Pin scored in a Goal: 1 point
- Each Beam scored in a Goal: 10 points
- Stacks of connected Pins and Beams earn height bonuses
- Matching Pin colors to Goal colors earns additional points

**Key Rules:**
- Robots must fit within an 11" x 20" x 15" starting size
- Scoring objects may be combined into Mixed Stacks for bonus points
- Both robots may clear Starting Pins during the match

Refer to the official manual for the complete rule set and updates:
https://www.vexrobotics.com/mix-and-match-manual"#,
};

/// Read-only catalog of VEX program knowledge.
///
/// All lookups are pure; filters allocate fresh vectors of the matching
/// entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowledgeBase;

impl KnowledgeBase {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub const fn competition_levels(&self) -> &'static [CompetitionLevel] {
        COMPETITION_LEVELS
    }

    #[must_use]
    pub const fn resources(&self) -> &'static [Resource] {
        RESOURCES
    }

    /// Resources whose category equals `category`, case-insensitively.
    #[must_use]
    pub fn resources_by_category(&self, category: &str) -> Vec<Resource> {
        RESOURCES
            .iter()
            .filter(|r| r.category.eq_ignore_ascii_case(category))
            .copied()
            .collect()
    }

    /// Resources whose title, description, or category contains `query`,
    /// case-insensitively.
    #[must_use]
    pub fn search_resources(&self, query: &str) -> Vec<Resource> {
        let query = query.to_lowercase();
        RESOURCES
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&query)
                    || r.description.to_lowercase().contains(&query)
                    || r.category.to_lowercase().contains(&query)
            })
            .copied()
            .collect()
    }

    #[must_use]
    pub fn programming_info(&self, topic: &str) -> Option<TopicInfo> {
        match topic {
            "gettingStarted" => Some(PROGRAMMING_GETTING_STARTED),
            "troubleshooting" => Some(PROGRAMMING_TROUBLESHOOTING),
            _ => None,
        }
    }

    #[must_use]
    pub fn competition_info(&self, topic: &str) -> Option<TopicInfo> {
        match topic {
            "registration" => Some(COMPETITION_REGISTRATION),
            "tournaments" => Some(COMPETITION_TOURNAMENTS),
            _ => None,
        }
    }

    #[must_use]
    pub fn game_manual_info(&self, topic: &str) -> Option<TopicInfo> {
        match topic {
            "v5PushBack" => Some(GAME_MANUAL_V5_PUSH_BACK),
            "iqMixMatch" => Some(GAME_MANUAL_IQ_MIX_MATCH),
            _ => None,
        }
    }

    /// System instruction sent ahead of every conversation, interpolating the
    /// competition-level catalog.
    #[must_use]
    pub fn system_prompt(&self) -> String {
        let levels = COMPETITION_LEVELS
            .iter()
            .map(|level| {
                let game = match (level.current_game, level.game_description) {
                    (Some(game), Some(desc)) => {
                        format!(" Current game: {game} - {desc}")
                    },
                    _ => String::new(),
                };
                format!("- **{}** ({}): {}{game}", level.name, level.age_range, level.description)
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"You are a VEX Robotics AI Assistant specialized in helping students, teachers, and teams with VEX robotics competitions. You have comprehensive knowledge about:

**Competition Levels:**
{levels}

**Key 2025-26 Season Updates:**
- V5 game: "Push Back" - 12' x 12' field with 88 blocks
- VEX IQ game: "Mix & Match" - 6' x 8' field with Pins and Beams
- Chrome Apps discontinued July 2025 - switch to web-based VEXcode
- World Championship moved to St. Louis, Missouri in April 2026
- Team registration deadline: December 19, 2025

**Programming Support:**
- VEXcode environments (Blocks, Python, C++)
- VEXcode VR for virtual practice
- Beginner path: Blocks → Python → C++
- Built-in tutorials and help systems

**Your Role:**
- Answer questions about VEX competitions, rules, and programming
- Provide step-by-step guidance for beginners
- Help with troubleshooting common issues
- Share official resources and documentation links
- Encourage and support new teams
- Provide age-appropriate guidance for different levels
- Include safety reminders and best practices

**Communication Style:**
- Be encouraging and supportive, especially for beginners
- Provide clear, actionable advice
- Include relevant links to official resources
- Break down complex topics into simple steps
- Ask follow-up questions to provide better help
- Always prioritize safety and proper procedures

Remember: Always provide accurate, up-to-date information based on official VEX sources. If you're unsure about specific rules or updates, direct users to official Q&A systems or documentation."#
        )
    }
}
