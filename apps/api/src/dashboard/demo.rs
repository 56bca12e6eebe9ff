use crate::models::profile::{
    CareerGoals, Complexity, Education, Experience, ExperienceType, Level, Profile, Project,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Sample profile served when a client has nothing stored yet.
pub fn demo_profile() -> Profile {
    Profile {
        name: "Demo User".to_string(),
        email: "demo@example.com".to_string(),
        education: Education {
            degree: "btech".to_string(),
            branch: "cse".to_string(),
            college: "Demo Institute".to_string(),
            graduation_year: Some(2025),
            cgpa: Some(8.2),
        },
        dsa_level: Level::Intermediate,
        dsa_problems: 180,
        os_level: Level::Intermediate,
        cn_level: Level::Basic,
        dbms_level: Level::Intermediate,
        oops_level: Level::Advanced,
        projects: vec![
            Project {
                name: "E-commerce Platform".to_string(),
                description: "Full stack MERN application".to_string(),
                technologies: strings(&["React", "Node.js", "MongoDB", "Express"]),
                complexity: Complexity::Intermediate,
                has_deployment: true,
                has_github: true,
            },
            Project {
                name: "Chat Application".to_string(),
                description: "Real-time chat with Socket.io".to_string(),
                technologies: strings(&["React", "Socket.io", "Node.js"]),
                complexity: Complexity::Intermediate,
                has_deployment: false,
                has_github: true,
            },
        ],
        experiences: vec![Experience {
            kind: ExperienceType::Internship,
            company: "Tech Startup".to_string(),
            role: "SDE Intern".to_string(),
            duration: 3,
            technologies: strings(&["React", "TypeScript", "AWS"]),
        }],
        goals: CareerGoals {
            target_roles: strings(&["Software Development Engineer", "Full Stack Developer"]),
            target_companies: strings(&["Google", "Microsoft", "Amazon"]),
            timeline_months: 4,
            weekly_hours: 20,
        },
    }
}
