//! The resume record itself.
//!
//! This is deliberately a constructed value rather than a static: the
//! renderer takes any `Resume` by reference, so tests can substitute
//! arbitrary fixtures.

use crate::model::{Contact, Education, Experience, Project, Resume, SkillGroup};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn resume() -> Resume {
    Resume {
        name: "RAHUL SANTOSH MISTRY".to_string(),
        title: "Software Development Engineer | Full Stack Developer".to_string(),

        contact: Contact {
            email: "rahulmistry751@gmail.com".to_string(),
            phone: "+918369074912".to_string(),
            linkedin: "https://linkedin.com/in/rahul-mistry-xl".to_string(),
            github: "https://github.com/rahulmistry751".to_string(),
            location: "Bangalore, India".to_string(),
        },

        about: "Experienced Software Development Engineer with 2+ years of expertise in \
                full-stack development. Specialized in React, Next.js, TypeScript, and cloud \
                technologies. Proven track record in leading teams, implementing testing \
                strategies, and building scalable applications with modern frameworks and tools."
            .to_string(),

        experience: vec![
            Experience {
                position: "Software Development Engineer".to_string(),
                company: "Argenbright Innovation Lab".to_string(),
                duration: "Dec 2022 - Present".to_string(),
                location: "Bangalore, India".to_string(),
                description: "Lead and manage both frontend and backend teams, ensuring \
                              seamless collaboration and timely delivery across projects."
                    .to_string(),
                achievements: Some(strings(&[
                    "Implemented unit testing practices using Vitest, improving test coverage and reliability across the codebase",
                    "Introduced Playwright for end-to-end testing in Next.js applications, reducing manual testing time by 70%",
                    "Integrated real-time chat functionality (one-on-one, group, and channel) using third-party React hooks",
                    "Implemented Single Sign-On (SSO) with Azure Active Directory, improving user experience and security",
                    "Ensured WCAG 2.1 accessibility compliance using semantic HTML and ARIA roles",
                    "Designed microservices workflow with AWS Lambda functions for automated email generation",
                    "Utilized pdfmake to dynamically generate PDF proposals, improving client engagement",
                ])),
            },
            Experience {
                position: "Game Tester".to_string(),
                company: "Ubisoft".to_string(),
                duration: "Mar 2022 - Dec 2022".to_string(),
                location: "India".to_string(),
                description: "Led a dynamic team, overseeing task assignments and ensuring \
                              alignment with project objectives."
                    .to_string(),
                achievements: Some(strings(&[
                    "Enhanced product quality by identifying and addressing edge case scenarios",
                    "Ensured smoother user experience and minimized disruptions",
                    "Maintained team coordination and met project deadlines consistently",
                ])),
            },
            Experience {
                position: "Junior Game Tester".to_string(),
                company: "Ubisoft".to_string(),
                duration: "Oct 2020 - Mar 2022".to_string(),
                location: "India".to_string(),
                description: "Maintained organized and efficient bug tracking systems for \
                              optimal performance."
                    .to_string(),
                achievements: Some(strings(&[
                    "Used JIRA for comprehensive bug tracking and resolution",
                    "Swiftly addressed issues to maintain optimal performance and user satisfaction",
                    "Developed systematic approach to quality assurance testing",
                ])),
            },
        ],

        education: vec![Education {
            degree: "Bachelor of Engineering".to_string(),
            field: "Electronics Engineering".to_string(),
            institution: "Ramrao Adik Institute of Technology".to_string(),
            year: "2016 - 2020".to_string(),
            gpa: Some("7.1 CGPA".to_string()),
        }],

        skills: vec![
            SkillGroup::new(
                "Programming Languages",
                &["TypeScript", "JavaScript", "Node.js", "Go/Golang", "Python"],
            ),
            SkillGroup::new(
                "Frontend Frameworks",
                &["React", "React Native", "Next.js", "Redux", "Expo"],
            ),
            SkillGroup::new("Styling & UI", &["MUI", "Tailwind CSS", "HTML", "CSS"]),
            SkillGroup::new(
                "Testing Tools",
                &["Vitest", "Playwright", "React Testing Library (RTL)", "Jest"],
            ),
            SkillGroup::new("Backend & APIs", &["Nest.js", "Prisma", "GraphQL"]),
            SkillGroup::new("Databases", &["MySQL"]),
            SkillGroup::new(
                "Cloud & DevOps",
                &["Docker", "Kubernetes", "AWS", "Azure Active Directory"],
            ),
            SkillGroup::new("Tools & Others", &["GitHub", "JIRA"]),
        ],

        projects: Some(vec![
            Project {
                name: "Book Alley".to_string(),
                description: "E-commerce web-app designed as the best alley for bibliophiles \
                              with complete shopping functionality"
                    .to_string(),
                tech: "React, React Router, Mockbee mock backend, Razorpay".to_string(),
                link: None,
                achievements: Some(strings(&[
                    "Implemented authentication, cart, and wishlist functionality",
                    "Integrated Razorpay Standard Web Checkout for payments",
                    "Built with self-implemented component library",
                ])),
            },
            Project {
                name: "Quiz App".to_string(),
                description: "Interactive quiz application specifically designed for Harry \
                              Potter enthusiasts"
                    .to_string(),
                tech: "React, React Router, Firebase".to_string(),
                link: None,
                achievements: Some(strings(&[
                    "Implemented dark mode functionality",
                    "Created category-wise quiz organization",
                    "Built with Firebase backend integration",
                ])),
            },
            Project {
                name: "Component Library".to_string(),
                description: "Simple, customizable mini CSS library for rapid development"
                    .to_string(),
                tech: "CSS, JavaScript".to_string(),
                link: None,
                achievements: Some(strings(&[
                    "Created customizable and reusable components",
                    "Included comprehensive utility classes",
                    "Designed for easy integration and customization",
                ])),
            },
        ]),
    }
}
