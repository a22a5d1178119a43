// File: ./src/model/mod.rs
pub mod display;
pub mod item;
pub mod language;
pub mod parser;
pub mod recurrence;
pub mod span;

pub use display::TaskDisplay;
pub use item::{Annotation, AnnotationKind, DateType, ParsedTask, Priority, TimeAnchor};
pub use language::{Language, LanguageConfig, LanguageTable, RecurringKeyword, RelativeDateModifier};
pub use parser::TaskParser;
pub use recurrence::{Frequency, RecurringPattern};
