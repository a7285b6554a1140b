//! Portfolio copy and content tables.
//!
//! Every section reads its text from here so wording changes never touch
//! view code. All entries are `'static` data compiled into the binary;
//! nothing is fetched at runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::components::icons::IconKind;

pub const NAME: &str = "Aditya Dakare";
pub const LOGO_HANDLE: &str = "ll_.aadi._ll";
pub const GREETING: &str = "Welcome to my portfolio";
pub const TAGLINE: &str = "Passionate about building scalable infrastructure, automating everything, \
     and shipping reliable software through modern CI/CD practices.";
pub const RESUME_PDF: &str = "/certificates/Aditya_Dakare_CV.pdf";

/// Job titles the hero banner cycles through.
pub const ROTATING_TITLES: &[&str] = &[
    "DevOps Engineer",
    "Cloud Architect",
    "CI/CD Specialist",
    "Automation Expert",
];

// =============================================================
// Skills
// =============================================================

/// Skill grouping behind the filter tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillArea {
    Linux,
    Cloud,
    CiCd,
    DevOpsTools,
    Iac,
    Monitoring,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: IconKind,
    pub area: SkillArea,
}

/// Filter tabs in display order. `None` is the All tab.
pub const SKILL_TABS: &[(Option<SkillArea>, &str)] = &[
    (None, "All"),
    (Some(SkillArea::Linux), "Linux"),
    (Some(SkillArea::Cloud), "Cloud"),
    (Some(SkillArea::CiCd), "CI/CD"),
    (Some(SkillArea::DevOpsTools), "DevOps Tools"),
    (Some(SkillArea::Iac), "IaC"),
    (Some(SkillArea::Monitoring), "Monitoring"),
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "Linux", icon: IconKind::Terminal, area: SkillArea::Linux },
    Skill { name: "Ubuntu", icon: IconKind::Server, area: SkillArea::Linux },
    Skill { name: "CentOS", icon: IconKind::Cpu, area: SkillArea::Linux },
    Skill { name: "AWS", icon: IconKind::Cloud, area: SkillArea::Cloud },
    Skill { name: "Azure", icon: IconKind::Cloud, area: SkillArea::Cloud },
    Skill { name: "GCP", icon: IconKind::Cloud, area: SkillArea::Cloud },
    Skill { name: "GitHub Actions", icon: IconKind::GitBranch, area: SkillArea::CiCd },
    Skill { name: "Jenkins", icon: IconKind::Settings, area: SkillArea::CiCd },
    Skill { name: "GitLab CI", icon: IconKind::GitBranch, area: SkillArea::CiCd },
    Skill { name: "Docker", icon: IconKind::Container, area: SkillArea::DevOpsTools },
    Skill { name: "Kubernetes", icon: IconKind::Layers, area: SkillArea::DevOpsTools },
    Skill { name: "Helm", icon: IconKind::Shield, area: SkillArea::DevOpsTools },
    Skill { name: "Terraform", icon: IconKind::Code, area: SkillArea::Iac },
    Skill { name: "Ansible", icon: IconKind::Network, area: SkillArea::Iac },
    Skill { name: "Pulumi", icon: IconKind::Code, area: SkillArea::Iac },
    Skill { name: "Prometheus", icon: IconKind::Activity, area: SkillArea::Monitoring },
    Skill { name: "Grafana", icon: IconKind::Activity, area: SkillArea::Monitoring },
    Skill { name: "Datadog", icon: IconKind::Database, area: SkillArea::Monitoring },
    Skill { name: "Vault", icon: IconKind::Lock, area: SkillArea::DevOpsTools },
    Skill { name: "ArgoCD", icon: IconKind::GitBranch, area: SkillArea::CiCd },
];

/// Skills shown for a tab selection, `None` meaning the All tab.
#[must_use]
pub fn matching_skills(area: Option<SkillArea>) -> Vec<Skill> {
    SKILLS
        .iter()
        .filter(|skill| area.is_none_or(|a| skill.area == a))
        .copied()
        .collect()
}

// =============================================================
// Experience
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[Job] = &[Job {
    title: "DEVOPS INTERN",
    company: "Servora",
    location: "Vasai",
    period: "2025 – PRESENT",
    highlights: &[
        "Engineered automated CI/CD pipelines using Jenkins and Groovy scripting for 5 critical \
         microservices, which successfully reduced manual deployment time by 50% and standardized \
         the software release process.",
        "Provisioned and configured core infrastructure components, including EC2 instances, S3 \
         storage, and RDS databases, in the AWS Cloud, leveraging Terraform for Infrastructure as \
         Code (IaC) principles.",
        "Supported production system reliability by actively monitoring application health using \
         tools like Prometheus and Grafana, contributing to the resolution of 10+ priority \
         incidents and helping to maintain overall system uptime.",
    ],
}];

// =============================================================
// Certifications
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub credential_id: &'static str,
    pub verify_url: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "AWS Certified Solutions Architect",
        issuer: "Amazon Web Services",
        year: "2025",
        credential_id: "ID123456789",
        verify_url: "#",
    },
    Certification {
        title: "Docker Certified Associate",
        issuer: "Docker Inc.",
        year: "2025",
        credential_id: "ID987654321",
        verify_url: "#",
    },
    Certification {
        title: "Certified Kubernetes Administrator",
        issuer: "Cloud Native Computing Foundation",
        year: "2025",
        credential_id: "ID456789123",
        verify_url: "#",
    },
    Certification {
        title: "Terraform Associate",
        issuer: "HashiCorp",
        year: "2025",
        credential_id: "ID321654987",
        verify_url: "#",
    },
];

// =============================================================
// Pipeline
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineStage {
    pub label: &'static str,
    pub icon: IconKind,
    pub blurb: &'static str,
}

/// Delivery stages in ship order.
pub const PIPELINE_STAGES: &[PipelineStage] = &[
    PipelineStage { label: "Commit", icon: IconKind::GitCommit, blurb: "Push code changes" },
    PipelineStage { label: "Build", icon: IconKind::Hammer, blurb: "Compile & package" },
    PipelineStage { label: "Test", icon: IconKind::Flask, blurb: "Run test suites" },
    PipelineStage { label: "Deploy", icon: IconKind::Rocket, blurb: "Ship to production" },
    PipelineStage { label: "Monitor", icon: IconKind::MonitorCheck, blurb: "Track performance" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PIPELINE_STATS: &[PipelineStat] = &[
    PipelineStat { value: "99.9%", label: "Uptime SLA" },
    PipelineStat { value: "< 5min", label: "Deploy Time" },
    PipelineStat { value: "100+", label: "Deployments/Week" },
    PipelineStat { value: "0", label: "Manual Steps" },
];

// =============================================================
// Projects
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub image_url: &'static str,
    /// Writeup PDF opened by the card's View button.
    pub writeup_pdf: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "CI/CD Pipeline Automation using Jenkins, Docker & AWS",
        summary: "DevOps Project. Designed and implemented an end-to-end CI/CD pipeline \
             integrating Jenkins, SonarQube, Docker, and AWS to automate build, test, and \
             deployment workflows. Configured Jenkins pipelines to automate code checkout, \
             frontend & backend builds, static code analysis, and Docker image creation. \
             Integrated SonarQube for continuous code quality analysis and enforced Quality Gate \
             validation to prevent faulty builds from progressing. Built and containerized \
             applications using Docker to ensure consistent and reproducible deployments. \
             Deployed and managed application infrastructure on AWS (EC2), enabling cloud-based \
             execution of CI/CD workflows. Implemented automated pipelines triggered on code \
             commits, simulating real-world DevOps workflows. Troubleshot pipeline failures, \
             configuration issues, and build errors, improving debugging and system-integration \
             skills.",
        tags: &["Jenkins", "Docker", "AWS", "SonarQube", "CI/CD", "DevOps"],
        image_url: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&h=600&fit=crop",
        writeup_pdf: "/certificates/CI_CD.pdf",
    },
    Project {
        title: "AI Yoga Pose Detection & Healthcare",
        summary: "Developed a real-time computer vision system using the YOLO Model to detect \
             and classify yoga poses from video. Implemented a core logic utilizing the Cosine \
             Similarity Algorithm to compare user posture against ideal pose landmarks, \
             generating instant corrective feedback. Designed the backend with a Pain Suggestion \
             Service and MongoDB to personalize practice, track progress, and recommend \
             adjustments to prevent injury.",
        tags: &["Computer Vision", "YOLO", "Cosine Similarity", "MongoDB"],
        image_url: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=800&h=600&fit=crop",
        writeup_pdf: "/certificates/Yoga.pdf",
    },
    Project {
        title: "E-Commerce Platform: Shoes Collection Website",
        summary: "Built a full-stack E-Commerce platform for local businesses using the MERN \
             Stack (MongoDB, Express, React, Node.js). Developed a secure Admin Panel (single-IP \
             access) for inventory and order management. Provided a complete client interface \
             for product viewing, cart management, and order placement.",
        tags: &["MERN Stack", "MongoDB", "Express", "React", "Node.js"],
        image_url: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=800&h=600&fit=crop",
        writeup_pdf: "/certificates/Shoe.pdf",
    },
    Project {
        title: "Blood Bank Management System (BBMS)",
        summary: "Developed a secure, web-based platform to automate and streamline the process \
             of blood donation and request across Donors, Patients, and Blood Bank \
             Administrators. Engineered the full-stack application using PHP and MySQL for \
             robust database management and application logic, with HTML5/CSS3/JavaScript for \
             the client side interface. Implemented critical features including real-time blood \
             stock updates, patient request submission, donor self-service profile management, \
             and location-based searching with Google Maps integration.",
        tags: &["PHP", "MySQL", "HTML5", "CSS3", "JavaScript", "Google Maps"],
        image_url: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=800&h=600&fit=crop",
        writeup_pdf: "/certificates/BBMS.pdf",
    },
];

// =============================================================
// Navigation and socials
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Navbar anchors in display order. Contact points at the footer.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "Experience", href: "#experience" },
    NavLink { label: "Certifications", href: "#certifications" },
    NavLink { label: "Pipeline", href: "#pipeline" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Resume", href: "#resume" },
    NavLink { label: "Contact", href: "#contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub href: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: IconKind::Github, href: "#", label: "GitHub" },
    SocialLink { icon: IconKind::Linkedin, href: "#", label: "LinkedIn" },
    SocialLink { icon: IconKind::Twitter, href: "#", label: "Twitter" },
    SocialLink { icon: IconKind::Mail, href: "#", label: "Email" },
];
