//! Static site content. Copy lives here as plain data so the section
//! components stay layout-only.

/// One service card.
pub struct Service {
	pub title: &'static str,
	pub description: &'static str,
}

/// One portfolio project card.
pub struct Project {
	pub title: &'static str,
	pub description: &'static str,
	pub technologies: &'static [&'static str],
	pub url: &'static str,
}

/// One technology with a self-assessed skill level, percent.
pub struct TechSkill {
	pub name: &'static str,
	pub level: u8,
}

/// Section anchors, in page order.
pub const SECTIONS: &[&str] = &[
	"home",
	"services",
	"projects",
	"technologies",
	"about",
	"contact",
];

/// Services offered.
pub const SERVICES: &[Service] = &[
	Service {
		title: "Web Development",
		description: "Responsive websites and web applications tailored for students and college projects.",
	},
	Service {
		title: "Mobile Apps",
		description: "Cross-platform mobile applications for iOS and Android.",
	},
	Service {
		title: "UI/UX Design",
		description: "Beautiful and intuitive designs that enhance user experience and engagement.",
	},
	Service {
		title: "Project Deployment",
		description: "Complete deployment solutions with domain setup and hosting configuration.",
	},
];

/// Featured portfolio projects.
pub const PROJECTS: &[Project] = &[
	Project {
		title: "Portfolio Website",
		description: "A sleek and responsive personal portfolio site built to showcase projects, skills, and achievements.",
		technologies: &["React", "Tailwind CSS", "EmailJS"],
		url: "https://sumangoswami.vercel.app/",
	},
	Project {
		title: "Music Listening Platform",
		description: "A modern web app for streaming and discovering music with a smooth, student-friendly listening experience.",
		technologies: &["HTML5", "CSS3", "JavaScript"],
		url: "https://beats-snowy.vercel.app/",
	},
	Project {
		title: "Mental Health Care Platform",
		description: "A student-friendly mental wellness platform focused on awareness and support with interactive modules.",
		technologies: &["HTML5", "CSS3", "JavaScript"],
		url: "https://vdhur.netlify.app/",
	},
	Project {
		title: "MyRupaya Chatbot",
		description: "AI-powered financial chatbot that helps users find the best credit cards based on their lifestyle.",
		technologies: &["React Native", "Firebase", "AI"],
		url: "https://myrupaya-ai.vercel.app/",
	},
];

/// Technology stack with skill levels.
pub const TECHNOLOGIES: &[TechSkill] = &[
	TechSkill { name: "HTML", level: 95 },
	TechSkill { name: "CSS", level: 90 },
	TechSkill { name: "JavaScript", level: 88 },
	TechSkill { name: "React", level: 85 },
	TechSkill { name: "React Native", level: 80 },
	TechSkill { name: "Node.js", level: 82 },
	TechSkill { name: "Python", level: 85 },
	TechSkill { name: "Java", level: 78 },
	TechSkill { name: "C++", level: 75 },
	TechSkill { name: "MongoDB", level: 80 },
	TechSkill { name: "MySQL", level: 75 },
	TechSkill { name: "Firebase", level: 78 },
];

/// Social profiles linked from the footer.
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
	("LinkedIn", "https://www.linkedin.com/in/utsavsingh265"),
	("GitHub", "https://github.com/utsav370singh"),
	("Instagram", "https://www.instagram.com/studhub22"),
];
