use crate::models::Category;

/// Static definition of one curriculum weekend. Core items are stored before
/// advanced items, in the order listed.
#[derive(Debug, Clone, Copy)]
pub struct WeekendSeed {
    pub number: i32,
    pub name: &'static str,
    pub deliverable: &'static str,
    pub why_it_matters: &'static str,
    pub category: Category,
    pub is_bonus: bool,
    pub core_items: &'static [&'static str],
    pub advanced_items: &'static [&'static str],
    pub done_criterion: &'static str,
}

pub const CURRICULUM: [WeekendSeed; 11] = [
    WeekendSeed {
        number: 1,
        name: "The Vibe Code Kickoff",
        deliverable: "A working web app that tracks your progress through these 10 weekends.",
        why_it_matters: "You start by proving to yourself that you can build something functional with AI. That psychological shift, from \"I'm not a coder\" to \"I built this\", makes everything else possible. Plus, you create a tool you'll actually use.",
        category: Category::Foundation,
        is_bonus: false,
        core_items: &[
            "Build it: Use Replit Agent, Lovable, or Cursor to create a simple tracker app.",
            "Core Features: List of all 10 weekends, completion checkboxes, notes field, progress bar.",
            "Ship it: Deploy live (Most vibe coding tools have features for this now).",
            "Use it: Log Weekend 1 as \"Complete\" before closing laptop.",
        ],
        advanced_items: &[
            "Add user authentication for multi-user support.",
            "Build as a PWA for mobile access.",
            "Add \"suggest next weekend\" logic.",
            "Add time-tracking field.",
        ],
        done_criterion: "Your tracker is live on the internet, you've logged Weekend 1, and you trust you'll actually use it.",
    },
    WeekendSeed {
        number: 2,
        name: "The Model Mapping Project",
        deliverable: "Model Topography Sheet + \"AI Rules of Thumb\" document.",
        why_it_matters: "Most people default to one AI model for everything, leaving capability on the table. The goal isn't \"which model is objectively best\"; it's developing your own instincts for which interface and brain works best for your specific tasks.",
        category: Category::Foundation,
        is_bonus: false,
        core_items: &[
            "Pick 2-3 Models: Use what you have (Claude, ChatGPT, Gemini).",
            "Run Tests: Run the same task through each: Deep Research, Writing, Strategy, Data, Visual.",
            "Compare: Which felt right? Which was faster? Which asked better questions?",
            "Synthesize: Create a one-page \"Rules of Thumb\" (e.g., \"Claude for drafts, ChatGPT for code\").",
        ],
        advanced_items: &[
            "Test specialized tools (Perplexity, etc.).",
            "Build a matrix including cost & context window.",
            "Test output consistency over time.",
            "Track \"editing time\" needed per model.",
        ],
        done_criterion: "You can answer \"which tool do I use for what?\" in 30 seconds without hesitation.",
    },
    WeekendSeed {
        number: 3,
        name: "The Deep Research Sprint",
        deliverable: "A 2-page research brief with a clear recommendation on a real decision.",
        why_it_matters: "Deep research is the capability most people have heard about but few have stress-tested. The gap between \"AI can do research\" and \"I trust this enough to make a decision\" is where this weekend lives.",
        category: Category::CoreProjects,
        is_bonus: false,
        core_items: &[
            "Real Question: Pick a decision you actually need to make (not hypothetical).",
            "Deep Tools: Use Claude, Gemini, or ChatGPT deep research modes.",
            "Iterate: Push back. Ask for disconfirming evidence. Don't accept first output.",
            "Structure: Problem, Findings, Options, Recommendation, Risks.",
        ],
        advanced_items: &[
            "Run the same question through all 3 major tools.",
            "Create a meta-analysis of which tool was most accurate.",
            "Build a \"Fact Check List\" of 10 claims you verify manually.",
        ],
        done_criterion: "Your brief leads to a recommendation you'd actually follow, with known uncertainties.",
    },
    WeekendSeed {
        number: 4,
        name: "The Analysis Project",
        deliverable: "A cleaned dataset + a one-page Insights Memo with specific actions.",
        why_it_matters: "This is where most people hit the gap between \"AI can analyze data\" and actually doing it. The tools are capable, but most people have never uploaded their own spreadsheet and pushed into \"what should I do about this?\" territory.",
        category: Category::CoreProjects,
        is_bonus: false,
        core_items: &[
            "Collect: Gather real data (CSV/spreadsheet) from Spotify, bank, Google Takeout, or Kaggle.",
            "Upload: Use Claude or ChatGPT to propose cleaning steps, 5-10 metrics, and 3 hypotheses.",
            "Produce: Cleaned dataset, summary table, 3 insights, 3 actions.",
            "Write: A one-page Insights Memo (no charts required).",
        ],
        advanced_items: &[
            "Build a reusable prompt template for monthly updates.",
            "Connect to a live data source for real-time analysis.",
            "Compare insights from Claude vs. ChatGPT on the same data.",
        ],
        done_criterion: "You can name the top 3 drivers of whatever you analyzed and what you're going to do about them.",
    },
    WeekendSeed {
        number: 5,
        name: "The Visual Reasoning Project",
        deliverable: "One infographic, diagram, or visual explainer you'd actually use, not a demo.",
        why_it_matters: "Most people use AI just to \"make pictures.\" The real skill is Visual Reasoning: getting AI to think through the logic of visual communication. It's not about art; it's about explaining complex ideas instantly.",
        category: Category::CoreProjects,
        is_bonus: false,
        core_items: &[
            "Concept: Pick a process, comparison, framework, or timeline.",
            "Reasoning: Ask AI \"What is the best logic to visualize this? What are the tradeoffs?\"",
            "Draft: Generate 2 alternate design approaches (e.g. flowchart vs matrix).",
            "Finalize: Build it using AI generation or tools like Canva/Gamma.",
            "Visual QA: Readable in 5s? One clear takeaway?",
        ],
        advanced_items: &[
            "Create a reusable visual system or template.",
            "Design and build a complex data visualization.",
            "Build a \"visual pattern library\" (2x2s, cycles, flows).",
        ],
        done_criterion: "You can explain the idea faster with the visual than with words, and others get the point instantly.",
    },
    WeekendSeed {
        number: 6,
        name: "The Information Pipeline",
        deliverable: "A reusable workflow: Summary + FAQ + Presentation Deck from one input source.",
        why_it_matters: "NotebookLM and Gamma are criminally underused. Most people try them once, then forget. This weekend builds them into your actual workflow so you can consistently turn raw, messy information into polished outputs without the manual grind.",
        category: Category::CoreProjects,
        is_bonus: false,
        core_items: &[
            "Input: Take a corpus (transcript, report, notes, or book).",
            "NotebookLM: Generate summary, glossary, FAQ, and audio overview.",
            "Gamma: Create 8-12 slide deck with 1 visual & clear recommendation.",
            "Document: Save the prompts and workflow to repeat later.",
        ],
        advanced_items: &[
            "Build full repurposing pipeline (Audio, Deck, One-pager, Tweets).",
            "Time the process & compare to manual effort.",
            "Create a reusable checklist template.",
        ],
        done_criterion: "You can brief someone on the material in under 7 minutes using your deck.",
    },
    WeekendSeed {
        number: 7,
        name: "The First Automation",
        deliverable: "One working automation handling production or distribution + a \"How It Works\" doc.",
        why_it_matters: "This is where leverage starts compounding. One automation that saves 30 minutes per piece of content x 50 pieces per year equals massive time back. Most avoid it because it feels complex, but today you build one that works.",
        category: Category::Automation,
        is_bonus: false,
        core_items: &[
            "Components: Must have Trigger, Transform, Route, Approval, and Logging.",
            "Tools: Use Lindy, n8n, Make, or native Slack/Notion workflows.",
            "Build: E.g., Notion note -> Summarize -> Draft Tweets -> Send to Slack.",
            "Default: Weekly Reading Digest (summarize saved links, email digest).",
        ],
        advanced_items: &[
            "Chain multiple automations together.",
            "Add conditional logic for different content types.",
            "Add robust error handling for failures.",
            "Log detailed analytics.",
        ],
        done_criterion: "You've run it twice successfully, it saved you time, and you can explain it.",
    },
    WeekendSeed {
        number: 8,
        name: "The Second Automation",
        deliverable: "One working productivity automation + a follow-up dashboard or tracker.",
        why_it_matters: "Weekend 7 was about creating output; this is about managing input. Two automations (content + productivity) creates a minimum viable automation stack. These are the systems that keep things from falling through the cracks.",
        category: Category::Automation,
        is_bonus: false,
        core_items: &[
            "Components: Trigger -> Transform -> Route -> Approval -> Logging.",
            "Pick One: Inbox -> Follow-up OR Lead -> Response OR Meeting Prep Bot.",
            "Default: Prep Bot (Calendar event -> LinkedIn lookup + History check -> Briefing sent 30m before).",
            "Platform: Use Lindy, n8n, Make, or Zapier.",
        ],
        advanced_items: &[
            "Add a feedback loop to rate output quality.",
            "Make it conversational (e.g., Slack bot drafts reply, you say \"send\").",
            "Connect to CRM/tracker for dashboard view.",
        ],
        done_criterion: "The system creates follow-ups automatically, you trust it enough to use it, and you have a tracker of open items.",
    },
    WeekendSeed {
        number: 9,
        name: "The Context Engineering Project",
        deliverable: "A structured personal context system + a Professional Context Document for pasting.",
        why_it_matters: "The gap between \"using AI\" and \"having AI that knows your context\" is enormous. Most people re-explain their situation every single conversation. This weekend, you build the system that fixes that so you stop repeating yourself.",
        category: Category::SystemAndBuild,
        is_bonus: false,
        core_items: &[
            "AI OS Structure: Create sections in Notion/Obsidian: Playbook, Artifacts Library, Automation Log, & Decisions Log.",
            "Capture Habit: Set up one central inbox for AI notes and a 15-minute weekly review.",
            "Context Doc: Write your Role, Key Projects, Style preferences, and a \"What to Avoid\" list.",
            "Deploy: Save the Context Doc where you can copy-paste it instantly.",
        ],
        advanced_items: &[
            "Create multiple context profiles (e.g., separate Work vs. Personal).",
            "Include actual examples of your writing/emails in the context file.",
            "Build a quarterly context refresh into your calendar.",
        ],
        done_criterion: "You have one place to store/reuse outputs, a Context Doc that improves chats, and a habit to maintain it.",
    },
    WeekendSeed {
        number: 10,
        name: "The AI-Powered Build",
        deliverable: "A working application that uses AI as a core feature: a chatbot, voice agent, or tool.",
        why_it_matters: "Weekend 1 used AI to help you build. This weekend is building something that uses AI. You're not just a user anymore; you're building AI-powered tools. This is the shift from consumption to creation.",
        category: Category::SystemAndBuild,
        is_bonus: false,
        core_items: &[
            "Platform: Use Google AI Studio or similar to build the core logic.",
            "Option A (Knowledge): Build a chatbot trained on your expertise, notes, or FAQs.",
            "Option B (Voice): Build a voice agent for practice (language, interviews, sales).",
            "Option C (Mini-Agent): Ingest docs -> extract info -> output structured data.",
            "Deploy: Ship it somewhere usable, even if just for yourself.",
        ],
        advanced_items: &[
            "Build something for others (team/clients), not just you.",
            "Train it on a specific company knowledge base.",
            "Give it to real people, get feedback, and iterate.",
            "Move from \"side project\" to \"prototype\".",
        ],
        done_criterion: "You've built and deployed something that has AI at its center, and you (or someone else) can actually use it.",
    },
    WeekendSeed {
        number: 11,
        name: "The Agent Exploration",
        deliverable: "Agent Scorecard + Use Cases",
        why_it_matters: "Agents are the future. Moving from \"chatbot\" to \"agent\" mental models requires hands-on stress testing to know limits.",
        category: Category::Bonus,
        is_bonus: true,
        core_items: &[
            "Research + Synthesis: Process 8 links/docs into a brief. Identify missing info.",
            "Operations Task: Turn notes into a checklist with timeline & roles.",
            "Production Task: Generate summary, email, 5 posts, & overview.",
        ],
        advanced_items: &[
            "Build your own simple agent using a framework like CrewAI or AutoGen. Peek under the hood.",
        ],
        done_criterion: "Agent Scorecard completed with ratings for Accuracy & Hallucination, Instruction Following, Output Usefulness, and Repeatability. Best use cases identified.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::TOTAL_WEEKENDS;

    #[test]
    fn numbers_are_sequential() {
        for (index, weekend) in CURRICULUM.iter().enumerate() {
            assert_eq!(weekend.number, index as i32 + 1);
        }
    }

    #[test]
    fn exactly_one_bonus_weekend_outside_the_main_sequence() {
        let bonus: Vec<_> = CURRICULUM.iter().filter(|w| w.is_bonus).collect();
        assert_eq!(bonus.len(), 1);
        assert_eq!(bonus[0].category, Category::Bonus);
        assert_eq!(CURRICULUM.len() - bonus.len(), TOTAL_WEEKENDS);
    }

    #[test]
    fn every_weekend_has_core_work() {
        for weekend in CURRICULUM.iter() {
            assert!(!weekend.core_items.is_empty(), "weekend {}", weekend.number);
        }
    }

    #[test]
    fn main_weekends_follow_program_order() {
        let categories: Vec<Category> = CURRICULUM
            .iter()
            .filter(|w| !w.is_bonus)
            .map(|w| w.category)
            .collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }
}
