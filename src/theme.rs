/// Cosmetic tokens for one variant of the landing page. The two variants
/// share every section and differ only in palette, background treatment and
/// a few lines of copy.
#[derive(Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: &'static str,
    pub warm: &'static str,
    pub background: &'static str,
    pub background_deep: &'static str,
    pub headline_top: &'static str,
    pub headline_accent: &'static str,
    pub cta_label: &'static str,
    /// Section id the page scrolls to after the reward overlay is dismissed.
    pub scroll_target: &'static str,
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            name: "MIDNIGHT",
            primary: "#2E5CFF",
            warm: "#FF9F1C",
            background: "#0F0F11",
            background_deep: "#1a1a2e",
            headline_top: "지루한 반복을",
            headline_accent: "모험으로 레벨업!",
            cta_label: "Start Game",
            scroll_target: "problem-section",
        }
    }

    pub fn arcade() -> Self {
        Self {
            name: "ARCADE",
            primary: "#FF9F1C",
            warm: "#D946EF",
            background: "#141110",
            background_deep: "#2e1e1a",
            headline_top: "오늘의 할 일을",
            headline_accent: "한 판의 게임으로!",
            cta_label: "Insert Coin",
            scroll_target: "problem-section",
        }
    }
}
