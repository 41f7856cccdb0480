pub mod formatter;

pub use formatter::{
    format_listing_detail, format_ranked_table, format_score, format_vectors_json,
    should_use_colors,
};
