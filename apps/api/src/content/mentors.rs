use serde::{Deserialize, Serialize};

/// An entry in the static mentor directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub name: String,
    pub role: String,
    pub organization: String,
    pub expertise: Vec<String>,
    pub bio: String,
}

fn mentor(name: &str, role: &str, organization: &str, expertise: &[&str], bio: &str) -> Mentor {
    Mentor {
        name: name.to_string(),
        role: role.to_string(),
        organization: organization.to_string(),
        expertise: expertise.iter().map(|e| e.to_string()).collect(),
        bio: bio.to_string(),
    }
}

pub fn default_mentors() -> Vec<Mentor> {
    vec![
        mentor(
            "Ananya Sharma",
            "Software Engineer",
            "Fintech startup, Bengaluru",
            &["Web development", "Python", "Interview preparation"],
            "Moved from Indore to Bengaluru after a diploma and taught herself to code.",
        ),
        mentor(
            "Rahul Verma",
            "Data Analyst",
            "E-commerce company, Pune",
            &["Excel", "SQL", "Data visualisation"],
            "Started in accounts and switched to analytics through online courses.",
        ),
        mentor(
            "Dr. Meera Iyer",
            "Physician",
            "District hospital, Madurai",
            &["NEET preparation", "Medicine", "Public health"],
            "First doctor in her family; mentors students aiming for medical entrance exams.",
        ),
        mentor(
            "Imran Khan",
            "Graphic Designer",
            "Freelance, Lucknow",
            &["Branding", "Figma", "Building a portfolio"],
            "Built a freelance design business serving clients across India.",
        ),
        mentor(
            "Priya Nair",
            "Government Officer",
            "State civil services, Kerala",
            &["Competitive exams", "Public administration", "Study planning"],
            "Cleared the state civil services exam on her third attempt.",
        ),
        mentor(
            "Vikram Singh",
            "Agritech Entrepreneur",
            "Startup founder, Jaipur",
            &["Entrepreneurship", "Agriculture", "Fundraising"],
            "Runs a company helping farmers sell produce directly to buyers.",
        ),
    ]
}
