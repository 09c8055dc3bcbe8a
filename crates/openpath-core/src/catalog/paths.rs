//! Static career path definitions.

use super::{CareerPath, PathCategory, Phase};

fn path(
    id: &str,
    title: &str,
    description: &str,
    category: PathCategory,
    icon: &str,
    phases: &[(&str, u32, u32, &str)],
) -> CareerPath {
    CareerPath {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        icon: icon.to_string(),
        total_days: 200,
        phases: phases
            .iter()
            .map(|(name, start, end, desc)| Phase {
                name: name.to_string(),
                start_day: *start,
                end_day: *end,
                description: desc.to_string(),
            })
            .collect(),
    }
}

pub(super) fn build_career_paths() -> Vec<CareerPath> {
    vec![
        path(
            "p1",
            "Full Stack \"Product\" Developer",
            "Master the MERN stack (MongoDB, Express, React, Node.js) to build complete web applications.",
            PathCategory::Development,
            "Globe",
            &[
                ("The Web Skeleton", 1, 40, "HTML5, CSS3, Git, JS Fundamentals"),
                ("JS & React Mastery", 41, 120, "ES6+, React Hooks, State Management"),
                ("Backend & Deployment", 121, 170, "Node.js, APIs, MongoDB, Auth"),
                ("Placement Readiness", 171, 200, "DSA, Resume, Mock Interviews"),
            ],
        ),
        path(
            "p2",
            "Data Scientist & Analytics",
            "Extract insights from data using Python, SQL, and Machine Learning engineering.",
            PathCategory::Data,
            "BarChart",
            &[
                ("Python & Math", 1, 40, "Syntax, Linear Algebra, Statistics"),
                ("Manipulation & Viz", 41, 100, "Pandas, NumPy, SQL, Matplotlib"),
                ("ML Engineering", 101, 170, "Scikit-Learn, Deployment, Streamlit"),
                ("Storytelling", 171, 200, "Advanced SQL, Tableau, Presentation"),
            ],
        ),
        path(
            "p3",
            "AI & Machine Learning Engineer",
            "Build applications using LLMs, Deep Learning, and RAG pipelines.",
            PathCategory::Data,
            "Bot",
            &[
                ("Deep Learning Fdns", 1, 60, "Neural Networks, PyTorch/TensorFlow"),
                ("Vision & NLP", 61, 120, "CNNs, Transformers, Hugging Face"),
                ("Generative AI", 121, 170, "RAG, LangChain, Vector DBs"),
                ("MLOps", 171, 200, "Quantization, Edge Deployment"),
            ],
        ),
        path(
            "p4",
            "DevOps & Cloud Engineer",
            "Automate deployment and manage cloud infrastructure using AWS, Docker, and K8s.",
            PathCategory::Infrastructure,
            "Server",
            &[
                ("Linux & Networking", 1, 40, "Bash, TCP/IP, DNS, OS Internals"),
                ("Containerization", 41, 100, "Docker, Kubernetes Basics"),
                ("CI/CD & IaC", 101, 170, "Jenkins, Terraform, AWS"),
                ("SRE", 171, 200, "Monitoring, Prometheus, Grafana"),
            ],
        ),
        path(
            "p5",
            "Cybersecurity Analyst",
            "Defend and attack systems as a Blue Team or Red Team specialist.",
            PathCategory::Infrastructure,
            "Shield",
            &[
                ("Security Fundamentals", 1, 50, "Network Security, Compliance"),
                ("Linux & Scripting", 51, 100, "Python for Pentesting, Kali Linux"),
                ("Ops & Defense", 101, 170, "OWASP Top 10, SIEM, Burp Suite"),
                ("CTFs & Reporting", 171, 200, "Capture The Flag, Vulnerability Reports"),
            ],
        ),
        path(
            "p6",
            "Mobile App Developer",
            "Build cross-platform iOS and Android apps using Flutter.",
            PathCategory::Development,
            "Smartphone",
            &[
                ("Dart & OOP", 1, 40, "Language Basics, Async Programming"),
                ("Flutter Framework", 41, 100, "Widgets, State Management, UI"),
                ("Backend Integration", 101, 170, "Firebase, Maps, API Integration"),
                ("Deployment", 171, 200, "Play Store, App Store Guidelines"),
            ],
        ),
        path(
            "p7",
            "Java Enterprise & Backend",
            "The bedrock of large-scale systems. Ideal for TCS, Infosys, and banking sectors.",
            PathCategory::Development,
            "Code",
            &[
                ("Core Java Mastery", 1, 60, "OOPs, Collections, Multithreading, JVM"),
                ("Advanced Java & DB", 61, 110, "JDBC, Complex SQL, Hibernate/JPA"),
                ("Spring Boot", 111, 170, "REST APIs, Spring Security, Microservices"),
                ("Testing & Patterns", 171, 200, "JUnit, Design Patterns, Interview Prep"),
            ],
        ),
        path(
            "p8",
            "QA Automation & SDET",
            "High-demand role involving writing code to test code. Strategic entry point.",
            PathCategory::Specialized,
            "CheckCircle",
            &[
                ("Programming Base", 1, 40, "Core Java or Python Fundamentals"),
                ("Selenium & Automation", 41, 100, "WebDriver, Locators, Page Object Model"),
                ("API Testing & Tools", 101, 170, "Postman, REST Assured, Cypress"),
                ("Certification Prep", 171, 200, "ISTQB Concepts, Cucumber/Gherkin"),
            ],
        ),
        path(
            "p9",
            "Blockchain & Web3 Developer",
            "Build decentralized applications and smart contracts on Ethereum.",
            PathCategory::Specialized,
            "Database",
            &[
                ("Blockchain Theory", 1, 40, "Distributed Ledgers, Hashing, EVM"),
                ("Smart Contracts", 41, 100, "Solidity, Remix IDE, Security"),
                ("dApp Engineering", 101, 170, "Ethers.js, React, Hardhat"),
                ("Auditing & Security", 171, 200, "Gas Optimization, Auditing"),
            ],
        ),
        path(
            "p10",
            "Embedded Systems & IoT",
            "Bridge software and hardware. Crucial for automotive and smart devices.",
            PathCategory::Infrastructure,
            "Cpu",
            &[
                ("C/C++ & Architecture", 1, 60, "Pointers, Memory, Microprocessors"),
                ("Microcontrollers", 61, 120, "GPIO, I2C, SPI, Arduino/ESP32"),
                ("RTOS & IoT", 121, 170, "FreeRTOS, MQTT, AWS IoT Core"),
                ("PCB Design Basics", 171, 200, "KiCad, Datasheets, Debugging"),
            ],
        ),
        path(
            "p11",
            "Game Development (Unity/C#)",
            "Create interactive 3D/2D experiences using the industry-standard engine.",
            PathCategory::Specialized,
            "Box",
            &[
                ("C# Programming", 1, 50, "Syntax, Logic, Game Math (Vectors)"),
                ("Unity Fundamentals", 51, 110, "Interface, Prefabs, Physics"),
                ("Mechanics & AI", 111, 170, "Pathfinding, Animation, UI"),
                ("Polish & Optimization", 171, 200, "Profiling, Memory, Object Pooling"),
            ],
        ),
        path(
            "p12",
            "UI/UX Product Design",
            "Design the psychology and aesthetics of software using Figma.",
            PathCategory::Design,
            "PenTool",
            &[
                ("Design Theory", 1, 50, "Color, Typography, Accessibility"),
                ("Tool Mastery", 51, 100, "Figma, Auto-layout, Prototyping"),
                ("UX Research", 101, 170, "Wireframing, User Testing"),
                ("Portfolio", 171, 200, "Case Studies, Behance"),
            ],
        ),
        path(
            "p13",
            "RPA Developer (UiPath)",
            "Automate business tasks. Low-code but high-logic corporate automation.",
            PathCategory::Specialized,
            "Zap",
            &[
                ("Logic & Mapping", 1, 50, "Flowcharts, Loops, Data Handling"),
                ("RPA Tools", 51, 120, "UiPath Studio, Selectors, Variables"),
                ("Advanced Automation", 121, 170, "PDF/Email Automation, OCR"),
                ("Exception Handling", 171, 200, "REFramework, Logging"),
            ],
        ),
        path(
            "p14",
            "Technical Product Management",
            "Bridge business, design, and engineering. For engineers with leadership traits.",
            PathCategory::Design,
            "Briefcase",
            &[
                ("Lifecycle & Agile", 1, 60, "Scrum, Kanban, User Stories, PRDs"),
                ("Metrics & Analytics", 61, 120, "SQL, A/B Testing, Pirate Metrics"),
                ("Strategy & Tech", 121, 170, "API Economy, System Design, PRD Capstone"),
                ("Product Interviews", 171, 200, "Product Sense, Estimation, Strategy"),
            ],
        ),
        path(
            "p15",
            "The Competitive Programmer",
            "Strictly for FAANG aspirants. Deep dive into Data Structures & Algorithms.",
            PathCategory::Development,
            "Terminal",
            &[
                ("Language Mastery", 1, 50, "C++/Java STL, Collections"),
                ("Linear DSA", 51, 100, "Arrays, Linked Lists, Stacks, Queues"),
                ("Non-Linear DSA", 101, 170, "Trees, Graphs, DP, Greedy"),
                ("Mock Interviews", 171, 200, "Whiteboard Coding, System Design"),
            ],
        ),
    ]
}
