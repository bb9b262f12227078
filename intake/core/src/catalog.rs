//! Question Catalog
//!
//! The fixed, ordered list of registration questions. The order here is the
//! order of the session; there is no skipping, reordering or re-entry.
//!
//! # Authoring conventions
//!
//! - A question whose prompt contains the word "optional" is exempt from the
//!   required-field rule. This is a content convention, not a flag; keep it
//!   in mind when editing prompt text.
//! - Questions with a choice set also keep a numbered menu inside the full
//!   prompt, so the free-text path ("pick a number") works on surfaces that
//!   do not render choice buttons.

/// A pure validation function: `Some(message)` rejects the input
pub type Validator = fn(&str) -> Option<&'static str>;

/// One selectable option of a choice question
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    /// Stored value (what the answer records)
    pub value: &'static str,
    /// Human-readable label (what confirmation lines show)
    pub label: &'static str,
}

/// A single question definition
///
/// Built once at process start; never mutated afterwards.
#[derive(Clone, Copy, Debug)]
pub struct QuestionDef {
    /// Unique key, also the submission payload key for this answer
    pub id: &'static str,
    /// Full prompt; may span multiple lines
    pub prompt: &'static str,
    /// Compact prompt for constrained displays
    pub prompt_short: Option<&'static str>,
    /// Hint shown in the empty input
    pub placeholder: Option<&'static str>,
    /// Free-text validator; `None` accepts anything subject to the
    /// required/optional rule
    pub validator: Option<Validator>,
    /// Fixed choice set; empty for free-text questions
    pub choices: &'static [Choice],
    /// Whether more than one choice may be selected
    pub allow_multiple: bool,
}

impl QuestionDef {
    /// A plain free-text question
    pub const fn text(id: &'static str, prompt: &'static str) -> Self {
        Self {
            id,
            prompt,
            prompt_short: None,
            placeholder: None,
            validator: None,
            choices: &[],
            allow_multiple: false,
        }
    }

    /// Set the compact prompt
    pub const fn with_short_prompt(mut self, prompt: &'static str) -> Self {
        self.prompt_short = Some(prompt);
        self
    }

    /// Set the input placeholder
    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set the free-text validator
    pub const fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Attach a choice set
    pub const fn with_choices(mut self, choices: &'static [Choice], multiple: bool) -> Self {
        self.choices = choices;
        self.allow_multiple = multiple;
        self
    }

    /// Whether this question offers a fixed choice set
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Whether the prompt flags this question as optional
    pub fn is_optional(&self) -> bool {
        self.prompt.contains("optional")
    }

    /// Label for a choice value, if the value belongs to this question
    pub fn label_for(&self, value: &str) -> Option<&'static str> {
        self.choices
            .iter()
            .find(|c| c.value == value)
            .map(|c| c.label)
    }
}

const EXPERIENCE_CHOICES: &[Choice] = &[
    Choice { value: "1", label: "Vibe Coder" },
    Choice { value: "2", label: "Indie Hacker" },
    Choice { value: "3", label: "Developer" },
    Choice { value: "4", label: "Maker" },
    Choice { value: "5", label: "Other" },
];

const ACCOMMODATION_CHOICES: &[Choice] = &[
    Choice { value: "1", label: "Yes, I need a bed" },
    Choice { value: "2", label: "No, I'm sorted" },
];

const DAY_CHOICES: &[Choice] = &[
    Choice { value: "1", label: "Sat 18" },
    Choice { value: "2", label: "Sun 19" },
    Choice { value: "3", label: "Mon 20" },
    Choice { value: "4", label: "Tue 21" },
    Choice { value: "5", label: "Wed 22" },
];

static QUESTIONS: [QuestionDef; 11] = [
    QuestionDef::text("name", "> Full name:")
        .with_placeholder("Your name...")
        .with_validator(validate_name),
    QuestionDef::text("email", "> Email:")
        .with_placeholder("you@email.com")
        .with_validator(validate_email),
    QuestionDef::text("phone", "> Phone / WhatsApp:").with_placeholder("+1 555 000 0000"),
    QuestionDef::text(
        "project",
        "> What are you building right now? (2-3 sentences)",
    )
    .with_placeholder("Describe your project..."),
    QuestionDef::text(
        "experience",
        "> How would you describe yourself?\n  [1] Vibe Coder (AI/no-code)\n  [2] Indie Hacker\n  [3] Professional developer\n  [4] Maker / Builder\n  [5] Other\n> Pick number(s), comma separated:",
    )
    .with_short_prompt("> How would you describe yourself?")
    .with_placeholder("E.g. 1,2")
    .with_choices(EXPERIENCE_CHOICES, true),
    QuestionDef::text(
        "accommodation",
        "> Do you need a place to stay?\n  [1] Yes, I need a bed\n  [2] No, I'm sorted\n> Answer 1 or 2:",
    )
    .with_short_prompt("> Do you need a place to stay?")
    .with_placeholder("1 or 2")
    .with_validator(validate_accommodation)
    .with_choices(ACCOMMODATION_CHOICES, false),
    QuestionDef::text("dietary", "> Any allergies or dietary restrictions?")
        .with_placeholder("None, vegetarian, vegan, ..."),
    QuestionDef::text("referral", "> How did you hear about us? (optional)")
        .with_placeholder("Twitter, a friend, ..."),
    QuestionDef::text(
        "days",
        "> Which days can you make it?\n  [1] Saturday 18\n  [2] Sunday 19\n  [3] Monday 20\n  [4] Tuesday 21\n  [5] Wednesday 22\n> Numbers, comma separated:",
    )
    .with_short_prompt("> Which days can you make it?")
    .with_placeholder("E.g. 1,2,3,4,5")
    .with_choices(DAY_CHOICES, true),
    QuestionDef::text(
        "loom",
        "> Record a short video (<2 min) on why we should pick you.\n> Paste the link here:",
    )
    .with_short_prompt("> Link to your video (<2 min):")
    .with_placeholder("https://www.loom.com/share/...")
    .with_validator(validate_loom),
    QuestionDef::text("comments", "> Anything else you want to tell us? (optional)")
        .with_placeholder("Anything at all..."),
];

/// The registration question sequence, in session order
pub fn catalog() -> &'static [QuestionDef] {
    &QUESTIONS
}

fn validate_name(value: &str) -> Option<&'static str> {
    if value.trim().len() < 2 {
        Some("Name is too short")
    } else {
        None
    }
}

fn validate_email(value: &str) -> Option<&'static str> {
    if !value.contains('@') {
        Some("Invalid email address")
    } else {
        None
    }
}

fn validate_accommodation(value: &str) -> Option<&'static str> {
    match value.trim() {
        "1" | "2" => None,
        _ => Some("Answer 1 or 2"),
    }
}

fn validate_loom(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("The video link is required")
    } else if !value.contains("loom.com") {
        Some("Must be a valid Loom link")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique_and_ordered() {
        let ids: Vec<_> = catalog().iter().map(|q| q.id).collect();
        assert_eq!(
            ids,
            vec![
                "name",
                "email",
                "phone",
                "project",
                "experience",
                "accommodation",
                "dietary",
                "referral",
                "days",
                "loom",
                "comments",
            ]
        );

        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_optional_convention() {
        let optional: Vec<_> = catalog()
            .iter()
            .filter(|q| q.is_optional())
            .map(|q| q.id)
            .collect();
        assert_eq!(optional, vec!["referral", "comments"]);
    }

    #[test]
    fn test_choice_questions() {
        let with_choices: Vec<_> = catalog()
            .iter()
            .filter(|q| q.has_choices())
            .map(|q| (q.id, q.allow_multiple))
            .collect();
        assert_eq!(
            with_choices,
            vec![
                ("experience", true),
                ("accommodation", false),
                ("days", true),
            ]
        );
    }

    #[test]
    fn test_label_for() {
        let days = catalog().iter().find(|q| q.id == "days").unwrap();
        assert_eq!(days.label_for("1"), Some("Sat 18"));
        assert_eq!(days.label_for("5"), Some("Wed 22"));
        assert_eq!(days.label_for("9"), None);
    }

    #[test]
    fn test_name_validator() {
        let name = catalog().iter().find(|q| q.id == "name").unwrap();
        let validate = name.validator.unwrap();
        assert_eq!(validate("a"), Some("Name is too short"));
        assert_eq!(validate("Alice"), None);
    }

    #[test]
    fn test_email_validator() {
        assert_eq!(validate_email("nope"), Some("Invalid email address"));
        assert_eq!(validate_email("a@b.c"), None);
    }

    #[test]
    fn test_accommodation_validator() {
        assert_eq!(validate_accommodation("1"), None);
        assert_eq!(validate_accommodation("2"), None);
        assert_eq!(validate_accommodation("3"), Some("Answer 1 or 2"));
        assert_eq!(validate_accommodation("yes"), Some("Answer 1 or 2"));
    }

    #[test]
    fn test_loom_validator() {
        assert_eq!(validate_loom(""), Some("The video link is required"));
        assert_eq!(
            validate_loom("https://youtu.be/xyz"),
            Some("Must be a valid Loom link")
        );
        assert_eq!(validate_loom("https://www.loom.com/share/abc"), None);
    }

    #[test]
    fn test_compact_prompts_present_on_menu_questions() {
        for q in catalog().iter().filter(|q| q.has_choices()) {
            assert!(q.prompt_short.is_some(), "{} needs a compact prompt", q.id);
            assert!(q.prompt.contains("[1]"), "{} needs a numbered menu", q.id);
        }
    }
}
