pub mod prompts;
pub mod render;

pub use prompts::{prompt_category_filter, prompt_play_again, prompt_spin};
pub use render::{display_menu, display_result_card, display_spinning, display_wheel};
