// Element ids, selectors and tuning constants for every behaviour on the page

use crate::field::FieldConfig;

#[derive(Debug, Clone)]
pub struct PageConfig {
    pub canvas_id: &'static str,
    pub field: FieldConfig,
    pub navbar: NavbarConfig,
    pub menu: MenuConfig,
    pub reveal: RevealConfig,
    pub counters: CounterConfig,
    pub faq: FaqConfig,
    pub anchor_selector: &'static str,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            canvas_id: "particleCanvas",
            field: FieldConfig::default(),
            navbar: NavbarConfig::default(),
            menu: MenuConfig::default(),
            reveal: RevealConfig::default(),
            counters: CounterConfig::default(),
            faq: FaqConfig::default(),
            anchor_selector: "a[href^=\"#\"]",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavbarConfig {
    pub id: &'static str,
    pub scrolled_class: &'static str,
    pub scroll_threshold: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            id: "navbar",
            scrolled_class: "scrolled",
            scroll_threshold: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MenuConfig {
    pub toggle_id: &'static str,
    pub menu_id: &'static str,
    pub active_class: &'static str,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_id: "navToggle",
            menu_id: "navMenu",
            active_class: "active",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RevealConfig {
    pub selector: &'static str,
    pub visible_class: &'static str,
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".anim-fade-in, .anim-fade-up",
            visible_class: "visible",
            threshold: 0.15,
            root_margin: "0px 0px -40px 0px",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CounterConfig {
    pub container_selector: &'static str,
    pub target_attribute: &'static str,
    pub threshold: f64,
    pub duration_ms: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            container_selector: ".hero-stats, .impact-numbers",
            target_attribute: "data-target",
            threshold: 0.3,
            duration_ms: 2000.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FaqConfig {
    pub item_selector: &'static str,
    pub question_selector: &'static str,
    pub active_class: &'static str,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            item_selector: ".faq-item",
            question_selector: ".faq-question",
            active_class: "active",
        }
    }
}
