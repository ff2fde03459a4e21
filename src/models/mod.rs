mod card;

pub use card::{Card, CopperParams, RainbowParams};
