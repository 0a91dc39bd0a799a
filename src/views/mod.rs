pub mod chat;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod shared;
pub mod skills;

pub use chat::ChatWidget;
pub use contact::ContactSection;
pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use hero::HeroSection;
pub use navbar::Navbar;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
