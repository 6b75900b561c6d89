pub mod resume;

pub use resume::{
    AdditionalInfo, ContactInfo, Education, Project, ProjectLink, ResumeDocument, Skill,
};
