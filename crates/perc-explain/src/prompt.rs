//! Prompt templates for the two explanation styles.

use perc_core::{BigUint, Computation, ExplanationStyle, SelectionMode};

/// Everything a prompt needs to describe one solved problem.
#[derive(Debug, Clone, Copy)]
pub struct ProblemContext<'a> {
    pub items: &'a [String],
    pub n: usize,
    pub r: i64,
    pub mode: SelectionMode,
    pub total_count: &'a BigUint,
}

impl<'a> ProblemContext<'a> {
    pub fn new(items: &'a [String], computation: &'a Computation) -> Self {
        Self {
            items,
            n: computation.n,
            r: computation.r,
            mode: computation.mode,
            total_count: &computation.total_count,
        }
    }

    fn item_list(&self) -> String {
        format!("[{}]", self.items.join(", "))
    }
}

/// Render the user prompt for `style`.
pub fn render_prompt(style: ExplanationStyle, ctx: &ProblemContext<'_>) -> String {
    match style {
        ExplanationStyle::Tutor => tutor_prompt(ctx),
        ExplanationStyle::Expert => expert_prompt(ctx),
    }
}

fn tutor_prompt(ctx: &ProblemContext<'_>) -> String {
    let noun = ctx.mode.noun();
    format!(
        "You are a friendly and encouraging math tutor explaining to a college student.

Problem: Choose {r} items from {items} ({noun}).

Instructions:
1. Start with a simple real-world analogy (like choosing team captains, arranging books, etc.)
2. Explain what \"{noun}\" means - does order matter or not?
3. Break down the counting process step-by-step with the actual items
4. Show the formula: {notation} and plug in values
5. End with why we got {count} total possibilities

Keep it conversational, clear, and under 400 words. Use emojis sparingly for clarity.
",
        r = ctx.r,
        items = ctx.item_list(),
        notation = ctx.mode.notation(),
        count = ctx.total_count,
    )
}

fn expert_prompt(ctx: &ProblemContext<'_>) -> String {
    let noun = ctx.mode.noun();
    format!(
        "You are a university mathematics professor providing a rigorous explanation.

Problem: Calculate the number of {noun}s when selecting {r} items from the set {items} where n = {n}.

Structure your response:

**Definition**: Precisely define {noun} in mathematical terms.

**Formula**: State the formula explicitly:
- If permutation: P(n,r) = n! / (n-r)!
- If combination: C(n,r) = n! / (r!(n-r)!)

**Calculation**: Show step-by-step arithmetic:
- Calculate factorials
- Perform division
- Arrive at {count}

**Application Context**: Mention 1-2 real-world applications in computer science, cryptography, or statistics where this calculation is crucial.

**Complexity Note**: Briefly mention algorithmic complexity of generating all arrangements.

Keep it formal, precise, and under 500 words.
",
        r = ctx.r,
        n = ctx.n,
        items = ctx.item_list(),
        count = ctx.total_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use perc_core::compute;

    fn labels() -> Vec<String> {
        ["A", "B", "C"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn tutor_prompt_embeds_problem() {
        let items = labels();
        let computation = compute(&items, 2, SelectionMode::Ordered);
        let prompt = render_prompt(
            ExplanationStyle::Tutor,
            &ProblemContext::new(&items, &computation),
        );

        assert!(prompt.starts_with("You are a friendly and encouraging math tutor"));
        assert!(prompt.contains("Problem: Choose 2 items from [A, B, C] (permutation)."));
        assert!(prompt.contains("P(n,r)"));
        assert!(prompt.contains("why we got 6 total possibilities"));
        assert!(prompt.contains("under 400 words"));
    }

    #[test]
    fn expert_prompt_embeds_problem() {
        let items = labels();
        let computation = compute(&items, 2, SelectionMode::Unordered);
        let prompt = render_prompt(
            ExplanationStyle::Expert,
            &ProblemContext::new(&items, &computation),
        );

        assert!(prompt.starts_with("You are a university mathematics professor"));
        assert!(prompt.contains(
            "number of combinations when selecting 2 items from the set [A, B, C] where n = 3."
        ));
        assert!(prompt.contains("- Arrive at 3"));
        assert!(prompt.contains("**Complexity Note**"));
        assert!(prompt.contains("under 500 words"));
    }

    #[test]
    fn large_counts_are_written_exactly() {
        let items: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        let computation = compute(&items, 30, SelectionMode::Ordered);
        let prompt = render_prompt(
            ExplanationStyle::Tutor,
            &ProblemContext::new(&items, &computation),
        );
        assert!(prompt.contains("265252859812191058636308480000000"));
    }
}
