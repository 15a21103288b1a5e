//! Question banks: the built-in NeuroBioMar set and TOML bank files.
//!
//! A bank file is a list of `[[questions]]` tables:
//!
//! ```toml
//! [[questions]]
//! id = 1
//! prompt = "Robot swarms imitate which natural behavior?"
//! choices = ["Ants", "Schools of fish", "Algae", "Migrating birds"]
//! correct_choice = 1
//! explanation = "They follow simple local rules, like fish schools do."
//! source_label = "Harvard SEAS"
//! source_url = "https://seas.harvard.edu/"
//! hint = "Think underwater."   # optional
//! ```

use crate::quiz::question::Question;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct BankFile {
    #[serde(default)]
    questions: Vec<Question>,
}

fn q(
    id: u32,
    prompt: &str,
    choices: [&str; 4],
    correct_choice: usize,
    explanation: &str,
    source: (&str, &str),
    hint: Option<&str>,
) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        choices: choices.iter().map(|c| c.to_string()).collect(),
        correct_choice,
        explanation: explanation.to_string(),
        source_label: source.0.to_string(),
        source_url: source.1.to_string(),
        hint: hint.map(str::to_string),
    }
}

/// The questions shipped with the game, in play order.
pub fn builtin() -> Vec<Question> {
    vec![
        q(
            1,
            "Robot swarms imitate which natural behavior?",
            ["Ants", "Schools of fish", "Algae", "Migrating birds"],
            1,
            "They follow simple local rules, the way fish schools do, avoiding \
             collisions while moving together.",
            (
                "Harvard SEAS",
                "https://seas.harvard.edu/news/2021/01/robotic-swarm-swims-school-fish",
            ),
            Some("The robots in question swim."),
        ),
        q(
            2,
            "What is artificial intelligence?",
            [
                "Machines that think like humans",
                "A natural learning process",
                "Simple mathematical rules",
                "A basic computing system",
            ],
            0,
            "AI is machines and programs that simulate human cognitive abilities, \
             such as learning and solving problems.",
            ("IBM AI", "https://www.ibm.com/topics/artificial-intelligence"),
            None,
        ),
        q(
            3,
            "What is the main goal of robotics?",
            [
                "Replacing humans in every task",
                "Building machines that carry out automated tasks",
                "Teaching humans to program",
                "Creating digital games",
            ],
            1,
            "Robotics builds machines able to perform tasks automatically to make \
             human work easier.",
            ("Robotics Online", "https://www.robotics.org/"),
            None,
        ),
        q(
            4,
            "Which cells let electric eels generate electricity?",
            ["Neurons", "Electrocytes", "Chromatophores", "Photophores"],
            1,
            "Electrocytes are stacked like batteries; firing together they produce \
             the eel's discharge, an idea behind soft underwater power cells.",
            ("Smithsonian Ocean", "https://ocean.si.edu/"),
            Some("The name says what they make."),
        ),
        q(
            5,
            "What does biomimetics mean?",
            [
                "Cloning marine animals",
                "Copying solutions from nature into technology",
                "Measuring ocean temperature",
                "Breeding fish in captivity",
            ],
            1,
            "Biomimetics studies how living things solve problems and applies those \
             designs to engineering, such as fin-driven underwater robots.",
            ("Biomimicry Institute", "https://biomimicry.org/"),
            None,
        ),
        q(
            6,
            "Which ocean movement can turbines use to produce clean energy?",
            ["Tides and currents", "Fish migration", "Salt crystals", "Coral growth"],
            0,
            "Tidal and current turbines convert the steady motion of seawater into \
             electricity, much like wind turbines do with air.",
            ("NOAA Ocean Service", "https://oceanservice.noaa.gov/"),
            None,
        ),
        q(
            7,
            "Why do researchers study plankton for environmental technology?",
            [
                "They are the largest ocean animals",
                "They react quickly to changes in water quality",
                "They produce electricity",
                "They live only in freshwater",
            ],
            1,
            "Plankton populations shift rapidly with temperature and pollution, \
             inspiring microsensors that monitor ocean health.",
            ("NOAA Ocean Service", "https://oceanservice.noaa.gov/"),
            Some("Small organisms, fast responses."),
        ),
    ]
}

/// Parse a TOML bank. Validation happens when a session starts.
pub fn parse(contents: &str) -> Result<Vec<Question>> {
    let bank: BankFile = toml::from_str(contents).context("Failed to parse question bank")?;
    Ok(bank.questions)
}

pub fn load_file(path: &Path) -> Result<Vec<Question>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read question bank from {}", path.display()))?;
    parse(&contents).with_context(|| format!("Invalid question bank {}", path.display()))
}
