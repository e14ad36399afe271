use crate::models::quest::{Difficulty, Quest, QuestStep};

struct StepSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    is_completed: bool,
    reward: &'static str,
    estimated_time: &'static str,
}

fn steps(seeds: &[StepSeed]) -> Vec<QuestStep> {
    seeds
        .iter()
        .map(|s| QuestStep {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            is_completed: s.is_completed,
            is_locked: false,
            reward: s.reward.to_string(),
            estimated_time: s.estimated_time.to_string(),
        })
        .collect()
}

pub fn quests() -> Vec<Quest> {
    vec![
        Quest {
            id: "engineering".to_string(),
            title: "Engineering Quest".to_string(),
            description: "Master the path to top government engineering colleges. Learn about JEE, NITs, IITs, and scholarship opportunities.".to_string(),
            category: "Technology".to_string(),
            difficulty: Difficulty::Intermediate,
            progress: 60,
            total_steps: 8,
            completed_steps: 5,
            estimated_duration: "4-6 weeks".to_string(),
            reward: "Engineering Pathfinder Badge".to_string(),
            badge: "🏗️".to_string(),
            is_unlocked: true,
            steps: steps(&[
                StepSeed {
                    id: "1",
                    title: "Understanding Engineering Branches",
                    description: "Explore different engineering fields and their career prospects",
                    is_completed: true,
                    reward: "+50 XP",
                    estimated_time: "30 mins",
                },
                StepSeed {
                    id: "2",
                    title: "JEE Main Preparation Strategy",
                    description: "Complete preparation roadmap for JEE Main examination",
                    is_completed: true,
                    reward: "+75 XP",
                    estimated_time: "1 hour",
                },
                StepSeed {
                    id: "3",
                    title: "Top Government Colleges Research",
                    description: "Research and shortlist top NITs, IITs, and state engineering colleges",
                    is_completed: true,
                    reward: "+100 XP",
                    estimated_time: "2 hours",
                },
                StepSeed {
                    id: "4",
                    title: "Scholarship Applications",
                    description: "Apply for merit-based and need-based scholarships",
                    is_completed: true,
                    reward: "+125 XP",
                    estimated_time: "3 hours",
                },
                StepSeed {
                    id: "5",
                    title: "Mock Interview Practice",
                    description: "Practice with industry professionals and alumni mentors",
                    is_completed: true,
                    reward: "+150 XP",
                    estimated_time: "1 hour",
                },
                StepSeed {
                    id: "6",
                    title: "College Application Process",
                    description: "Complete applications for top choice government colleges",
                    is_completed: false,
                    reward: "+200 XP",
                    estimated_time: "4 hours",
                },
                StepSeed {
                    id: "7",
                    title: "Financial Planning Workshop",
                    description: "Plan education expenses and explore funding options",
                    is_completed: false,
                    reward: "+175 XP",
                    estimated_time: "2 hours",
                },
                StepSeed {
                    id: "8",
                    title: "Industry Mentorship Connect",
                    description: "Connect with working engineers from government sector",
                    is_completed: false,
                    reward: "+250 XP + Badge",
                    estimated_time: "30 mins",
                },
            ]),
        },
        Quest {
            id: "civil-services".to_string(),
            title: "Civil Services Journey".to_string(),
            description: "Navigate the path to IAS, IPS, and other administrative services. Master UPSC strategy and interview preparation.".to_string(),
            category: "Administration".to_string(),
            difficulty: Difficulty::Advanced,
            progress: 30,
            total_steps: 10,
            completed_steps: 3,
            estimated_duration: "8-12 months".to_string(),
            reward: "Public Service Champion Badge".to_string(),
            badge: "🏛️".to_string(),
            is_unlocked: true,
            steps: Vec::new(),
        },
        Quest {
            id: "medical".to_string(),
            title: "Medical Professional Quest".to_string(),
            description: "Chart your course to government medical colleges. NEET preparation, college selection, and specialization guidance.".to_string(),
            category: "Healthcare".to_string(),
            difficulty: Difficulty::Advanced,
            progress: 0,
            total_steps: 9,
            completed_steps: 0,
            estimated_duration: "6-8 months".to_string(),
            reward: "Healthcare Hero Badge".to_string(),
            badge: "⚕️".to_string(),
            is_unlocked: false,
            steps: Vec::new(),
        },
        Quest {
            id: "teaching".to_string(),
            title: "Education Leader Path".to_string(),
            description: "Become a government teacher or professor. Navigate B.Ed, teaching exams, and academic career opportunities.".to_string(),
            category: "Education".to_string(),
            difficulty: Difficulty::Beginner,
            progress: 0,
            total_steps: 6,
            completed_steps: 0,
            estimated_duration: "3-4 months".to_string(),
            reward: "Knowledge Keeper Badge".to_string(),
            badge: "📚".to_string(),
            is_unlocked: false,
            steps: Vec::new(),
        },
    ]
}
