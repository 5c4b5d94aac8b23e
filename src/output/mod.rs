pub mod formatter;

pub use formatter::{
    format_detail, format_json, format_message, format_message_colored, format_tsv,
    should_use_colors,
};
