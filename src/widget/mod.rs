pub mod language;
pub mod render;
pub mod translator;

pub use language::TargetLanguage;
pub use render::render_widget;
pub use translator::{TranslateOutcome, TranslatorWidget, WidgetSnapshot, WidgetView};
