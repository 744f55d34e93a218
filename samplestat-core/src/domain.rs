pub mod ids;
pub mod distribution;
pub mod values;
pub mod sample;
pub mod record;

pub use ids::*;
pub use distribution::*;
pub use values::*;
pub use sample::*;
pub use record::*;
