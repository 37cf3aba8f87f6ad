mod plan;
mod render;
mod validate;

pub use plan::cmd_plan;
pub use render::cmd_render;
pub use validate::cmd_validate;
