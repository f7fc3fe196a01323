use vexchat_core::knowledge::{CompetitionLevel, KnowledgeBase, Resource, TopicInfo};

/// Read-only queries over the static knowledge catalog.
pub struct KnowledgeService {
    knowledge: KnowledgeBase,
}

impl KnowledgeService {
    #[must_use]
    pub const fn new() -> Self {
        Self { knowledge: KnowledgeBase::new() }
    }

    #[must_use]
    pub const fn competition_levels(&self) -> &'static [CompetitionLevel] {
        self.knowledge.competition_levels()
    }

    /// Resource list filtered by the optional query parameters.
    ///
    /// `search` wins over `category` when both are present.
    #[must_use]
    pub fn find_resources(&self, category: Option<&str>, search: Option<&str>) -> Vec<Resource> {
        if let Some(query) = search {
            return self.knowledge.search_resources(query);
        }
        if let Some(category) = category {
            return self.knowledge.resources_by_category(category);
        }
        self.knowledge.resources().to_vec()
    }

    /// Topic lookup dispatched on the `type` query parameter. Unknown types
    /// and unknown topics both yield `None`.
    #[must_use]
    pub fn topic_info(&self, info_type: &str, topic: &str) -> Option<TopicInfo> {
        match info_type {
            "programming" => self.knowledge.programming_info(topic),
            "competition" => self.knowledge.competition_info(topic),
            "gamemanual" => self.knowledge.game_manual_info(topic),
            _ => None,
        }
    }

    /// The two fixed game-manual records.
    #[must_use]
    pub fn game_manuals(&self) -> (Option<TopicInfo>, Option<TopicInfo>) {
        (
            self.knowledge.game_manual_info("v5PushBack"),
            self.knowledge.game_manual_info("iqMixMatch"),
        )
    }
}

impl Default for KnowledgeService {
    fn default() -> Self {
        Self::new()
    }
}
