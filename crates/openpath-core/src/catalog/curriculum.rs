//! Day-content resolution.
//!
//! `resolve` is pure and total: explicit entries exist for a handful
//! of registered day numbers, every other day synthesizes a generic
//! placeholder parameterized only by the day number and task key.
//! Calling it twice with the same arguments yields structurally
//! identical output.

use crate::task::{
    AnswerType, DayTask, InputTask, OutputTask, Resource, ResourceKind, SubmissionType,
    SynthesisTask, TaskKey,
};

/// Content of one registered curriculum day, before it gets a key.
struct Entry {
    topic: &'static str,
    phase: &'static str,
    placement: bool,
    input_description: &'static str,
    resources: &'static [(ResourceKind, &'static str, &'static str)],
    output_description: &'static str,
    submission_type: SubmissionType,
    question: &'static str,
}

impl Entry {
    fn into_task(self, key: TaskKey) -> DayTask {
        DayTask {
            key,
            topic: self.topic.to_string(),
            phase: self.phase.to_string(),
            placement: self.placement,
            input: InputTask {
                description: self.input_description.to_string(),
                resources: self
                    .resources
                    .iter()
                    .map(|(kind, title, url)| Resource {
                        kind: *kind,
                        title: title.to_string(),
                        url: url.to_string(),
                    })
                    .collect(),
            },
            output: OutputTask {
                description: self.output_description.to_string(),
                submission_type: self.submission_type,
            },
            synthesis: SynthesisTask {
                question: self.question.to_string(),
                answer_type: AnswerType::Text,
            },
        }
    }
}

/// Resolve the task for one day of one path.
///
/// The catalog does not enforce an upper bound on `day`; callers keep
/// requests inside 1..=200 via the navigation clamp.
pub fn resolve(path_id: &str, day: u32) -> DayTask {
    let key = TaskKey::new(path_id, day);
    match explicit_entry(day) {
        Some(entry) => entry.into_task(key),
        None => fallback(key),
    }
}

/// Generic placeholder for days without registered content. Phase
/// label comes from the standard four-phase thresholds; placement
/// mode switches on after day 170.
fn fallback(key: TaskKey) -> DayTask {
    let day = key.day_number;
    let phase = if day > 170 {
        "Phase IV: Placement Readiness"
    } else if day > 120 {
        "Phase III: The Capstone Portfolio"
    } else if day > 40 {
        "Phase II: Core Competency"
    } else {
        "Phase I: Foundations"
    };
    DayTask {
        topic: format!("Day {day} Curriculum Topic"),
        phase: phase.to_string(),
        placement: day > 170,
        input: InputTask {
            description: format!(
                "Detailed study material for Day {day}. Focus on reading documentation \
                 and understanding the core concepts."
            ),
            resources: vec![
                Resource {
                    kind: ResourceKind::Article,
                    title: "Official Documentation".to_string(),
                    url: "#".to_string(),
                },
                Resource {
                    kind: ResourceKind::Video,
                    title: "Video Tutorial".to_string(),
                    url: "#".to_string(),
                },
            ],
        },
        output: OutputTask {
            description: format!(
                "Build a small component or script that demonstrates the concept \
                 learned in Day {day}."
            ),
            submission_type: SubmissionType::Code,
        },
        synthesis: SynthesisTask {
            question: "What was the most challenging part of today's concept?".to_string(),
            answer_type: AnswerType::Text,
        },
        key,
    }
}

/// Registered content, keyed by day number: the opening week of the
/// MERN track and the closing placement week.
fn explicit_entry(day: u32) -> Option<Entry> {
    let entry = match day {
        1 => Entry {
            topic: "How the Internet Works & HTML Basics",
            phase: "Phase I: The Web Skeleton",
            placement: false,
            input_description:
                "Understand the request/response cycle, DNS, and the basic building blocks of a webpage.",
            resources: &[
                (
                    ResourceKind::Article,
                    "How the Web Works (MDN)",
                    "https://developer.mozilla.org/en-US/docs/Learn/Common_questions/Web_mechanics/How_does_the_Internet_work",
                ),
                (
                    ResourceKind::Video,
                    "The Odin Project: Foundations",
                    "https://www.theodinproject.com/paths/foundations/courses/foundations",
                ),
            ],
            output_description:
                "Create an 'index.html' file manually. Include a Header, Main section, and Footer using only Semantic HTML5 tags (no divs).",
            submission_type: SubmissionType::Code,
            question:
                "Why do we use semantic tags like <article> instead of just <div>? Explain in 2 sentences.",
        },
        2 => Entry {
            topic: "Git & GitHub Fundamentals",
            phase: "Phase I: The Web Skeleton",
            placement: false,
            input_description:
                "Version control is crucial. Learn to initialize a repo, stage files, and commit changes.",
            resources: &[
                (
                    ResourceKind::Article,
                    "The Odin Project: Git Basics",
                    "https://www.theodinproject.com/lessons/foundations-git-basics",
                ),
                (
                    ResourceKind::Video,
                    "Git & GitHub Crash Course",
                    "https://www.youtube.com/watch?v=RGOj5yH7evk",
                ),
            ],
            output_description:
                "Initialize a git repository for your index.html. Create a .gitignore file. Push your code to a public GitHub repository named 'openpath-portfolio'.",
            submission_type: SubmissionType::Link,
            question: "What is the specific difference between 'git add' and 'git commit'?",
        },
        3 => Entry {
            topic: "CSS Box Model & Selectors",
            phase: "Phase I: The Web Skeleton",
            placement: false,
            input_description:
                "Everything in CSS is a box. Master margins, borders, padding, and content.",
            resources: &[
                (
                    ResourceKind::Article,
                    "MDN: The Box Model",
                    "https://developer.mozilla.org/en-US/docs/Learn/CSS/Building_blocks/The_box_model",
                ),
                (
                    ResourceKind::Video,
                    "Kevin Powell: CSS Box Model",
                    "https://www.youtube.com/watch?v=rIO5326qE_s",
                ),
            ],
            output_description:
                "Style your index.html. Add a profile picture with a circular border, and ensure padding does not increase the element's width (box-sizing).",
            submission_type: SubmissionType::Code,
            question: "Explain the difference between 'content-box' and 'border-box' behavior.",
        },
        4 => Entry {
            topic: "Modern Layouts: Flexbox",
            phase: "Phase I: The Web Skeleton",
            placement: false,
            input_description:
                "Abandon floats. Learn Flexbox to create responsive 1-dimensional layouts.",
            resources: &[
                (ResourceKind::Tool, "Flexbox Froggy", "https://flexboxfroggy.com/"),
                (
                    ResourceKind::Article,
                    "CSS Tricks: Guide to Flexbox",
                    "https://css-tricks.com/snippets/css/a-guide-to-flexbox/",
                ),
            ],
            output_description:
                "Create a 3-column 'Pricing Card' component. On mobile screens, it should stack vertically (flex-direction).",
            submission_type: SubmissionType::Code,
            question: "When would you use 'justify-content' vs 'align-items'?",
        },
        5 => Entry {
            topic: "JavaScript Variables & Execution",
            phase: "Phase I: The Web Skeleton",
            placement: false,
            input_description:
                "Understand how JS is executed (Hoisting, Scope, and Temporal Dead Zone).",
            resources: &[
                (
                    ResourceKind::Video,
                    "Namaste JavaScript: Execution Context",
                    "https://www.youtube.com/watch?v=ZvbzSrg0afE",
                ),
                (
                    ResourceKind::Article,
                    "JavaScript.info: Variables",
                    "https://javascript.info/variables",
                ),
            ],
            output_description:
                "Write a script that declares variables using var, let, and const. Demonstrate the scope difference in a console log.",
            submission_type: SubmissionType::Code,
            question: "Why is 'undefined' different from 'null' in JavaScript?",
        },
        196 => Entry {
            topic: "ATS-Proof Resume Strategy",
            phase: "Phase IV: Placement Readiness",
            placement: true,
            input_description:
                "Recruiters scan resumes for 6 seconds. Your resume must be parseable by Applicant Tracking Systems (ATS).",
            resources: &[
                (
                    ResourceKind::Article,
                    "Resume.org: The Harvard Resume Guide",
                    "https://www.resume.org/",
                ),
                (
                    ResourceKind::Tool,
                    "Jake's Resume (LaTeX Template)",
                    "https://github.com/jakegut/resume",
                ),
            ],
            output_description:
                "Rewrite the 'Experience' section of your resume using the 'Action Verb + Metric + Result' formula. (e.g., 'Reduced API latency by 30%...')",
            submission_type: SubmissionType::Text,
            question: "Paste one 'Before' and 'After' bullet point from your resume.",
        },
        197 => Entry {
            topic: "Mock Interview: Behavioral",
            phase: "Phase IV: Placement Readiness",
            placement: true,
            input_description:
                "Master the STAR method (Situation, Task, Action, Result) for behavioral questions.",
            resources: &[
                (ResourceKind::Tool, "Pramp: Free Mock Interviews", "https://www.pramp.com/"),
                (
                    ResourceKind::Video,
                    "Behavioral Interviewing - STAR Method",
                    "https://www.youtube.com/",
                ),
            ],
            output_description:
                "Record a 2-minute video answering: 'Tell me about a time you failed to meet a deadline.'",
            submission_type: SubmissionType::File,
            question:
                "Critique your own video. Did you spend too much time on the Situation vs the Result?",
        },
        198 => Entry {
            topic: "System Design Basics",
            phase: "Phase IV: Placement Readiness",
            placement: true,
            input_description:
                "Understand Scalability, Load Balancers, Caching, and Database Sharding.",
            resources: &[
                (
                    ResourceKind::Video,
                    "ByteByteGo: System Design Course",
                    "https://www.youtube.com/@ByteByteGo",
                ),
                (
                    ResourceKind::Article,
                    "System Design Primer",
                    "https://github.com/donnemartin/system-design-primer",
                ),
            ],
            output_description:
                "Draw a high-level architecture diagram for a URL Shortener (like Bit.ly).",
            submission_type: SubmissionType::File,
            question: "Why might you need a Load Balancer in this system?",
        },
        199 => Entry {
            topic: "Aptitude & Logic Warmup",
            phase: "Phase IV: Placement Readiness",
            placement: true,
            input_description:
                "Many mass recruiters (TCS, Infosys) have an initial aptitude screen. Don't fail the easy round.",
            resources: &[
                (ResourceKind::Tool, "IndiaBix: Aptitude Questions", "https://www.indiabix.com/"),
                (ResourceKind::Tool, "PrepInsta: Placement Papers", "https://prepinsta.com/"),
            ],
            output_description:
                "Complete a 20-question practice set on 'Time and Work' and 'Probability'. Aim for >80%.",
            submission_type: SubmissionType::Text,
            question: "What was the trickiest question you encountered?",
        },
        200 => Entry {
            topic: "The Final Application",
            phase: "Phase IV: Placement Readiness",
            placement: true,
            input_description:
                "You are ready. It's time to hunt. Organize your portfolio and target companies.",
            resources: &[
                (ResourceKind::Tool, "Wellfound (AngelList)", "https://wellfound.com/"),
                (
                    ResourceKind::Article,
                    "Cold Email Templates for Developers",
                    "https://www.freecodecamp.org/news",
                ),
            ],
            output_description:
                "Apply to 5 companies. Send 3 cold DMs to founders/CTOs with your portfolio link.",
            submission_type: SubmissionType::Text,
            question: "Reflect on Day 1 vs Day 200. You are now an Engineer. How does it feel?",
        },
        _ => return None,
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_deterministic_for_explicit_and_fallback_days() {
        for day in [1, 5, 6, 40, 41, 120, 121, 170, 171, 196, 200] {
            assert_eq!(resolve("p1", day), resolve("p1", day), "day {day}");
        }
    }

    #[test]
    fn explicit_day_one_carries_registered_content() {
        let task = resolve("p1", 1);
        assert_eq!(task.key, TaskKey::new("p1", 1));
        assert_eq!(task.topic, "How the Internet Works & HTML Basics");
        assert_eq!(task.phase, "Phase I: The Web Skeleton");
        assert!(!task.placement);
        assert_eq!(task.input.resources.len(), 2);
        assert_eq!(task.output.submission_type, SubmissionType::Code);
    }

    #[test]
    fn fallback_phase_thresholds() {
        assert_eq!(resolve("p1", 40).phase, "Phase I: Foundations");
        assert_eq!(resolve("p1", 41).phase, "Phase II: Core Competency");
        assert_eq!(resolve("p1", 120).phase, "Phase II: Core Competency");
        assert_eq!(resolve("p1", 121).phase, "Phase III: The Capstone Portfolio");
        assert_eq!(resolve("p1", 170).phase, "Phase III: The Capstone Portfolio");
        assert_eq!(resolve("p1", 171).phase, "Phase IV: Placement Readiness");
    }

    #[test]
    fn placement_flag_switches_after_day_170() {
        assert!(!resolve("p1", 170).placement);
        assert!(resolve("p1", 171).placement);
        assert!(resolve("p1", 195).placement);
        assert!(resolve("p1", 200).placement);
    }

    #[test]
    fn fallback_is_scoped_to_the_requesting_path() {
        let a = resolve("p2", 50);
        let b = resolve("p3", 50);
        assert_eq!(a.key, TaskKey::new("p2", 50));
        assert_eq!(b.key, TaskKey::new("p3", 50));
        // Same generic content, different key.
        assert_eq!(a.topic, b.topic);
        assert_ne!(a.key, b.key);
    }
}
