pub mod footer;
pub mod hero;
pub mod icon;
pub mod impact;
pub mod navigation;
pub mod solutions;

pub use footer::Footer;
pub use hero::HeroSection;
pub use icon::{Icon, icons};
pub use impact::ImpactSection;
pub use navigation::Navigation;
pub use solutions::SolutionsSection;
