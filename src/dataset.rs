use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedDataset {
    pub producer: SeedProducer,
    pub freelancers: Vec<SeedFreelancer>,
    pub jobs: Vec<SeedJob>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedProducer {
    pub username: String,
    pub password: String,
    pub email: String,
    pub company_name: String,
    pub linked_in_url: String,
    pub company_website: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedFreelancer {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedJob {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills_required: Vec<String>,
    pub employment_type: String,
    pub location: String,
    pub salary: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

lazy_static::lazy_static! {
    pub static ref SEED_DATASET: SeedDataset = build_seed_dataset();
}

fn build_seed_dataset() -> SeedDataset {
    SeedDataset {
        producer: SeedProducer {
            username: "producer".into(),
            password: "Password123!".into(),
            email: "producer@example.com".into(),
            company_name: "Seeded Studios".into(),
            linked_in_url: "https://www.linkedin.com/company/seeded-studios".into(),
            company_website: "https://seeded.example.com".into(),
        },
        freelancers: vec![
            SeedFreelancer {
                username: "freelancer01".into(),
                password: "Password123!".into(),
                email: "freelancer01@example.com".into(),
                first_name: "Freelancer01".into(),
                last_name: "User".into(),
                bio: "Experienced full stack developer skilled in building scalable web applications with modern technologies.".into(),
                skills: vec![
                    "JavaScript".into(),
                    "React".into(),
                    "Node.js".into(),
                    "Express".into(),
                    "MongoDB".into(),
                    "REST API".into(),
                    "Git".into(),
                ],
            },
            SeedFreelancer {
                username: "freelancer02".into(),
                password: "Password123!".into(),
                email: "freelancer02@example.com".into(),
                first_name: "Freelancer02".into(),
                last_name: "User".into(),
                bio: "Data scientist with expertise in machine learning, data analysis, and visualization to extract actionable insights.".into(),
                skills: vec![
                    "Python".into(),
                    "Machine Learning".into(),
                    "Pandas".into(),
                    "NumPy".into(),
                    "Scikit-learn".into(),
                    "SQL".into(),
                    "Tableau".into(),
                ],
            },
            SeedFreelancer {
                username: "freelancer03".into(),
                password: "Password123!".into(),
                email: "freelancer03@example.com".into(),
                first_name: "Freelancer03".into(),
                last_name: "User".into(),
                bio: "DevOps engineer specializing in cloud infrastructure, container orchestration, and continuous integration pipelines.".into(),
                skills: vec![
                    "AWS".into(),
                    "Docker".into(),
                    "Kubernetes".into(),
                    "Jenkins".into(),
                    "Terraform".into(),
                    "Bash scripting".into(),
                    "Linux".into(),
                ],
            },
            SeedFreelancer {
                username: "freelancer04".into(),
                password: "Password123!".into(),
                email: "freelancer04@example.com".into(),
                first_name: "Freelancer04".into(),
                last_name: "User".into(),
                bio: "Machine learning engineer skilled in designing and deploying production-ready ML models using popular frameworks.".into(),
                skills: vec![
                    "Python".into(),
                    "TensorFlow".into(),
                    "PyTorch".into(),
                    "Data Preprocessing".into(),
                    "Model Deployment".into(),
                    "Flask".into(),
                    "Docker".into(),
                ],
            },
            SeedFreelancer {
                username: "freelancer05".into(),
                password: "Password123!".into(),
                email: "freelancer05@example.com".into(),
                first_name: "Freelancer05".into(),
                last_name: "User".into(),
                bio: "Frontend developer focused on creating responsive, accessible, and high-performance user interfaces.".into(),
                skills: vec![
                    "HTML".into(),
                    "CSS".into(),
                    "JavaScript".into(),
                    "React".into(),
                    "Vue.js".into(),
                    "Webpack".into(),
                    "Git".into(),
                ],
            },
            SeedFreelancer {
                username: "freelancer06".into(),
                password: "Password123!".into(),
                email: "freelancer06@example.com".into(),
                first_name: "Freelancer06".into(),
                last_name: "User".into(),
                bio: "Backend developer experienced in building robust RESTful APIs and database management systems.".into(),
                skills: vec![
                    "Node.js".into(),
                    "Express".into(),
                    "MongoDB".into(),
                    "PostgreSQL".into(),
                    "REST API".into(),
                    "JWT".into(),
                    "Docker".into(),
                ],
            },
            SeedFreelancer {
                username: "freelancer07".into(),
                password: "Password123!".into(),
                email: "freelancer07@example.com".into(),
                first_name: "Freelancer07".into(),
                last_name: "User".into(),
                bio: "Software engineer with a focus on cloud solutions, automation, and scalable system design.".into(),
                skills: vec![
                    "AWS".into(),
                    "Python".into(),
                    "Terraform".into(),
                    "Docker".into(),
                    "Kubernetes".into(),
                    "CI/CD".into(),
                    "Git".into(),
                ],
            },
            SeedFreelancer {
                username: "freelancer08".into(),
                password: "Password123!".into(),
                email: "freelancer08@example.com".into(),
                first_name: "Freelancer08".into(),
                last_name: "User".into(),
                bio: "Data analyst proficient in SQL, Excel, and BI tools to provide detailed reports and insights.".into(),
                skills: vec![
                    "SQL".into(),
                    "Excel".into(),
                    "Power BI".into(),
                    "Tableau".into(),
                    "Python".into(),
                    "Data Visualization".into(),
                    "Reporting".into(),
                ],
            },
            SeedFreelancer {
                username: "freelancer09".into(),
                password: "Password123!".into(),
                email: "freelancer09@example.com".into(),
                first_name: "Freelancer09".into(),
                last_name: "User".into(),
                bio: "Mobile app developer with experience building cross-platform applications using React Native and Flutter.".into(),
                skills: vec![
                    "React Native".into(),
                    "Flutter".into(),
                    "JavaScript".into(),
                    "Dart".into(),
                    "REST API".into(),
                    "Firebase".into(),
                    "Git".into(),
                ],
            },
            SeedFreelancer {
                username: "freelancer10".into(),
                password: "Password123!".into(),
                email: "freelancer10@example.com".into(),
                first_name: "Freelancer10".into(),
                last_name: "User".into(),
                bio: "QA engineer with expertise in automation testing and performance testing for web applications.".into(),
                skills: vec![
                    "Selenium".into(),
                    "Cypress".into(),
                    "JavaScript".into(),
                    "Test Automation".into(),
                    "Performance Testing".into(),
                    "Jenkins".into(),
                    "Git".into(),
                ],
            },
        ],
        jobs: vec![
            SeedJob {
                title: "Full Stack Developer".into(),
                description: "We are looking for a passionate Full Stack Developer to design, develop, and maintain web applications with a focus on seamless user experiences. You will work closely with product managers and designers to build scalable software solutions.".into(),
                requirements: vec![
                    "Experience with front-end frameworks (React, Angular, or Vue)".into(),
                    "Proficient in back-end development using Node.js, Express, or similar frameworks".into(),
                    "Strong understanding of RESTful APIs and integration".into(),
                    "Experience working with databases like MongoDB or PostgreSQL".into(),
                    "Familiarity with Git, CI/CD pipelines, and agile methodologies".into(),
                ],
                skills_required: vec![
                    "JavaScript (ES6+)".into(),
                    "React.js / Angular / Vue.js".into(),
                    "Node.js and Express".into(),
                    "MongoDB / SQL Databases".into(),
                    "Version control (Git)".into(),
                    "API design and integration".into(),
                    "Problem-solving and debugging".into(),
                ],
                employment_type: "Full-time".into(),
                location: "Remote".into(),
                salary: 110000,
                tags: vec!["fullstack".into(), "javascript".into(), "react".into(), "node".into()],
            },
            SeedJob {
                title: "Data Scientist".into(),
                description: "Join our data team to analyze and interpret complex datasets to help drive strategic decisions. You will build predictive models, perform data visualization, and communicate insights to stakeholders.".into(),
                requirements: vec![
                    "Strong background in statistics and machine learning".into(),
                    "Experience with Python, R, or similar languages".into(),
                    "Familiarity with data visualization tools (Matplotlib, Seaborn, Tableau)".into(),
                    "Knowledge of SQL for data querying".into(),
                    "Ability to work with large datasets and clean data effectively".into(),
                ],
                skills_required: vec![
                    "Python (NumPy, pandas, scikit-learn)".into(),
                    "Machine Learning algorithms".into(),
                    "Data visualization and reporting".into(),
                    "SQL and database querying".into(),
                    "Statistical analysis".into(),
                    "Communication skills to present insights".into(),
                ],
                employment_type: "Full-time".into(),
                location: "Remote".into(),
                salary: 125000,
                tags: vec!["data".into(), "ml".into(), "python".into(), "analytics".into()],
            },
            SeedJob {
                title: "DevOps Engineer".into(),
                description: "We seek a DevOps Engineer to streamline our software delivery lifecycle by automating infrastructure, deploying updates, and ensuring system reliability and scalability.".into(),
                requirements: vec![
                    "Experience with cloud platforms (AWS, Azure, GCP)".into(),
                    "Knowledge of containerization tools (Docker, Kubernetes)".into(),
                    "Familiarity with CI/CD tools like Jenkins, GitHub Actions, or GitLab CI".into(),
                    "Strong scripting skills (Bash, Python, etc.)".into(),
                    "Monitoring and logging expertise".into(),
                ],
                skills_required: vec![
                    "Cloud services (AWS, Azure, GCP)".into(),
                    "Docker and Kubernetes".into(),
                    "CI/CD pipeline design and automation".into(),
                    "Infrastructure as Code (Terraform, CloudFormation)".into(),
                    "Linux system administration".into(),
                    "Scripting languages".into(),
                ],
                employment_type: "Full-time".into(),
                location: "Remote".into(),
                salary: 120000,
                tags: vec!["devops".into(), "cloud".into(), "kubernetes".into(), "cicd".into()],
            },
            SeedJob {
                title: "Machine Learning Engineer".into(),
                description: "Design and deploy machine learning models into production to solve real-world problems. Collaborate with data scientists and software engineers to build scalable ML pipelines.".into(),
                requirements: vec![
                    "Experience in building and deploying ML models".into(),
                    "Proficiency in Python and ML frameworks (TensorFlow, PyTorch)".into(),
                    "Knowledge of model optimization and tuning".into(),
                    "Understanding of cloud deployment and APIs".into(),
                    "Strong problem-solving skills".into(),
                ],
                skills_required: vec![
                    "Python and ML libraries".into(),
                    "TensorFlow / PyTorch".into(),
                    "Data preprocessing and feature engineering".into(),
                    "Model deployment (Docker, Flask, FastAPI)".into(),
                    "Cloud platforms (AWS, GCP, Azure)".into(),
                    "Version control and collaboration tools".into(),
                ],
                employment_type: "Full-time".into(),
                location: "Remote".into(),
                salary: 130000,
                tags: vec!["ml".into(), "python".into(), "tensorflow".into(), "pytorch".into()],
            },
            SeedJob {
                title: "Frontend Developer".into(),
                description: "We are looking for a Frontend Developer to create engaging and responsive user interfaces. You will translate UI/UX designs into high-quality code that runs efficiently on all devices.".into(),
                requirements: vec![
                    "Expertise in HTML, CSS, and JavaScript".into(),
                    "Experience with React, Vue, or Angular frameworks".into(),
                    "Understanding of responsive design and cross-browser compatibility".into(),
                    "Familiarity with version control systems".into(),
                    "Ability to optimize applications for maximum speed".into(),
                ],
                skills_required: vec![
                    "HTML5, CSS3, JavaScript (ES6+)".into(),
                    "React.js / Vue.js / Angular".into(),
                    "Responsive and mobile-first design".into(),
                    "Web performance optimization".into(),
                    "Git and collaboration workflows".into(),
                    "Debugging and testing tools".into(),
                ],
                employment_type: "Full-time".into(),
                location: "Remote".into(),
                salary: 100000,
                tags: vec!["frontend".into(), "javascript".into(), "react".into()],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{SeedDataset, SEED_DATASET};

    #[test]
    fn default_dataset_shape() {
        assert_eq!(SEED_DATASET.producer.username, "producer");
        assert_eq!(SEED_DATASET.freelancers.len(), 10);
        assert_eq!(SEED_DATASET.jobs.len(), 5);

        let usernames = SEED_DATASET
            .freelancers
            .iter()
            .map(|f| f.username.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(usernames.len(), 10);

        let titles = SEED_DATASET.jobs.iter().map(|j| j.title.as_str()).collect::<HashSet<_>>();
        assert_eq!(titles.len(), 5);
    }

    #[test]
    fn dataset_loads_from_json_fixture() {
        let fixture = r#"{
            "producer": {
                "username": "p",
                "password": "pw",
                "email": "p@example.com",
                "company_name": "Acme",
                "linked_in_url": "https://www.linkedin.com/company/acme",
                "company_website": "https://acme.example.com"
            },
            "freelancers": [{
                "username": "f",
                "password": "pw",
                "email": "f@example.com",
                "first_name": "F",
                "last_name": "User",
                "bio": "",
                "skills": ["Rust"]
            }],
            "jobs": [{
                "title": "T",
                "description": "D",
                "requirements": ["R"],
                "skills_required": ["S"],
                "employment_type": "Full-time",
                "location": "Remote",
                "salary": 1
            }]
        }"#;

        let dataset: SeedDataset = serde_json::from_str(fixture).unwrap();
        assert_eq!(dataset.freelancers.len(), 1);
        assert_eq!(dataset.jobs.len(), 1);
        assert!(dataset.jobs[0].tags.is_empty());
    }
}
