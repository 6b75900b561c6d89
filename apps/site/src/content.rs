//! Compiled-in CV content served when no `RESUME_DATA` file is configured.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::{
    AdditionalInfo, ContactInfo, Education, Project, ProjectLink, ResumeDocument, Skill,
};

static RESUME: LazyLock<ResumeDocument> = LazyLock::new(build);

/// The single read-only document instance.
pub fn resume_data() -> &'static ResumeDocument {
    &RESUME
}

/// Loads the document served by this process.
///
/// With no path the compiled-in content is used. Either way the list keys
/// are validated and duplicates fail startup.
pub fn load_resume(path: Option<&Path>) -> Result<ResumeDocument> {
    let doc = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read CV data from {}", path.display()))?;
            let doc: ResumeDocument = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid CV data in {}", path.display()))?;
            info!("Loaded CV data from {}", path.display());
            doc
        }
        None => resume_data().clone(),
    };
    doc.validate().context("CV data failed validation")?;
    Ok(doc)
}

fn skill(category: &str, items: &str) -> Skill {
    Skill {
        category: category.to_string(),
        items: items.to_string(),
    }
}

fn project(
    title: &str,
    subtitle: Option<&str>,
    url: &str,
    link_text: &str,
    details: &[&str],
) -> Project {
    Project {
        title: title.to_string(),
        subtitle: subtitle.map(str::to_string),
        link: ProjectLink {
            url: url.to_string(),
            text: link_text.to_string(),
        },
        details: details.iter().map(|d| d.to_string()).collect(),
    }
}

fn education(degree: &str, period: &str) -> Education {
    Education {
        degree: degree.to_string(),
        period: period.to_string(),
        link: None,
    }
}

fn build() -> ResumeDocument {
    ResumeDocument {
        name: "THOBEKA ZITHA".to_string(),
        tagline: "AI & Machine Learning Enthusiast | Python Developer | Data-Driven Problem Solver"
            .to_string(),
        contact: ContactInfo {
            location: "Johannesburg, South Africa".to_string(),
            email: "thobekazitha40@gmail.com".to_string(),
            github: "github.com/thobekazitha-gif".to_string(),
            linkedin: "www.linkedin.com/in/thobeka-zitha".to_string(),
        },
        summary: "Motivated and detail-oriented AI & Machine Learning Enthusiast with hands-on \
                  experience developing intelligent, data-driven applications through the Tech \
                  Career Accelerator Bootcamp. Skilled in Python, Scikit-learn, TensorFlow, and \
                  Flask, with strong problem-solving, teamwork, and analytical abilities. \
                  Passionate about using technology to improve decision-making, automation, and \
                  digital experience."
            .to_string(),
        skills: vec![
            skill("Programming", "Python, JavaScript, HTML, CSS"),
            skill(
                "Machine Learning",
                "Scikit-learn, TensorFlow, Pandas, NumPy, Matplotlib, Seaborn",
            ),
            skill("Frameworks & Tools", "Flask, Git, GitHub, Jupyter Notebook"),
            skill("Data Visualization", "Power BI, Matplotlib, Seaborn"),
            skill("Design & UX", "Figma, Canva"),
            skill(
                "Soft Skills",
                "Problem Solving, Communication, Collaboration, Critical Thinking",
            ),
        ],
        projects: vec![
            project(
                "Loan Prediction Using Classification Machine Learning",
                Some("Week 6"),
                "https://github.com/Logic-League/Loan-Prediction-Using-Classification-Machine-Learning-.git",
                "GitHub Repository",
                &[
                    "Built a supervised ML model using Python and Scikit-learn to predict loan approvals.",
                    "Conducted data preprocessing and feature engineering with Pandas.",
                    "Implemented and compared Logistic Regression and Decision Tree algorithms.",
                    "Achieved 87% accuracy and documented workflow in GitHub with clean structure.",
                ],
            ),
            project(
                "Sentiment Analyzer",
                Some("Week 5"),
                "https://c0qai4ygity3.trickle.host",
                "Live Demo",
                &[
                    "Developed a real-time NLP web app to detect sentiment polarity (positive/negative).",
                    "Integrated Flask and Python for backend logic and text preprocessing.",
                    "Applied tokenization, vectorization, and classification techniques.",
                    "Designed a simple, user-friendly interface for seamless testing.",
                ],
            ),
            project(
                "Logic League Resume Builder",
                Some("Week 4"),
                "https://logic-league-one.vercel.app/",
                "Live Demo",
                &[
                    "Created a dynamic resume builder web app that generates structured resumes.",
                    "Implemented form handling and layout logic using HTML, CSS, and JavaScript.",
                    "Focused on responsive design and user input validation for smooth user experience.",
                ],
            ),
            project(
                "Logic League Educational Material",
                Some("Week 3"),
                "https://logic-league.vercel.app",
                "Live Demo",
                &[
                    "Designed and developed a web-based platform for AI-powered learning content.",
                    "Showcased lesson navigation, user progress tracking, and modern UI/UX.",
                    "Highlighted structured collaboration through GitHub version control.",
                ],
            ),
            project(
                "AI Predictive Maintenance Tool",
                Some("Week 2"),
                "https://crow-flask-51049066.figma.site",
                "Prototype",
                &[
                    "Built a predictive analytics concept using Figma prototypes and Python modeling.",
                    "Demonstrated how ML can forecast machine failures to reduce downtime.",
                    "Focused on data visualization and presentation of actionable insights.",
                ],
            ),
            project(
                "Chatbot",
                Some("Week 1"),
                "https://landbot.online/v3/H-3106021-L0BWBVHVKR7Y1AMH/index.html",
                "Live Demo",
                &[
                    "Designed an interactive chatbot that simulates real customer conversations.",
                    "Implemented structured logic flows and tested response accuracy.",
                    "Enhanced understanding of conversational design and data handling.",
                ],
            ),
            project(
                "GradJob Application",
                Some("Week 7"),
                "https://grad-job-application.vercel.app/",
                "Live Demo",
                &[
                    "Developed a web-based job application tool integrated with resume uploads and search functionality.",
                    "Focused on responsive UI and clean navigation using modern JavaScript frameworks.",
                    "Demonstrated full-cycle application development and deployment.",
                ],
            ),
            project(
                "ZithaSites — Modern Business Website Design Solutions",
                None,
                "https://sites.google.com/view/zithasites",
                "Website Link",
                &[
                    "Created a platform offering affordable, custom websites for small businesses and restaurants.",
                    "Focused on branding, user experience, and full digital presence setup (WhatsApp Business, social media, and Google Maps integration).",
                    "Designed with beige-accented modern UI and responsive layouts.",
                ],
            ),
        ],
        education: vec![
            education(
                "Higher Certificate in Information Technology (Software Engineering)",
                "Completed 2024",
            ),
            education(
                "Capaciti Tech Career Accelerator — AI & Machine Learning Stream",
                "Completed 2025",
            ),
            education(
                "Coursera: Professional Development Certificate",
                "Completed October 2025",
            ),
            education(
                "Coursera: AI Bootcamp Certificate",
                "Completed September 2025",
            ),
        ],
        objective: "To advance my career as an AI Developer, mastering model deployment, cloud \
                    integration, and ethical AI development — while creating technology that \
                    connects innovation with human-centered impact."
            .to_string(),
        additional_info: AdditionalInfo {
            interests: "Chess, movies, and exploring how creativity and data intersect.".to_string(),
            portfolio: None,
            availability:
                "Immediately available for internships, junior developer, or AI assistant roles."
                    .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_document_is_valid() {
        assert!(resume_data().validate().is_ok());
    }

    #[test]
    fn test_builtin_document_shape() {
        let doc = resume_data();
        assert_eq!(doc.skills.len(), 6);
        assert_eq!(doc.projects.len(), 8);
        assert_eq!(doc.education.len(), 4);
        assert!(doc.additional_info.portfolio.is_none());
        assert!(doc.projects.last().unwrap().subtitle.is_none());
    }

    #[test]
    fn test_same_instance_every_call() {
        assert!(std::ptr::eq(resume_data(), resume_data()));
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        assert_eq!(&load_resume(None).unwrap(), resume_data());
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(resume_data()).unwrap();
        std::io::Write::write_all(&mut file, json.as_bytes()).unwrap();

        let doc = load_resume(Some(file.path())).unwrap();
        assert_eq!(&doc, resume_data());
    }

    #[test]
    fn test_load_rejects_duplicate_keys() {
        let mut doc = resume_data().clone();
        doc.skills.push(doc.skills[0].clone());
        let mut file = tempfile::NamedTempFile::new().unwrap();
        serde_json::to_writer(&mut file, &doc).unwrap();

        let err = load_resume(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("Duplicate skill category 'Programming'"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{\"name\": 1}").unwrap();
        assert!(load_resume(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = load_resume(Some(Path::new("/nonexistent/cv.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read CV data"));
    }
}
