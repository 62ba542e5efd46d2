//! Prompt composer for the two-message answer prompt
//!
//! The system message is a fixed literal. The human message is a fixed
//! template with exactly two substitution points, `{query}` and
//! `{context}`, replaced literally with no validation of either value.

/// Fixed system instruction, not parameterized
pub const SYSTEM_PROMPT: &str = "You are an expert research assistant. \
You answer queries using only the sources provided in the context, and you \
cite the URL of each source you rely on.";

/// Human message template with `{query}` and `{context}` substitution points
pub const HUMAN_TEMPLATE: &str = "Please answer the following query based on the sources below. \
Cite the URLs of the sources you used.

Query: {query}
---
<context>
{context}
</context>";

/// The composed (system, human) message pair sent to the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessages {
    pub system: String,
    pub human: String,
}

/// Compose the prompt for a query and its assembled context
///
/// Pass-through semantics: the query and context land in the template
/// verbatim, surrounded by unchanged framing text.
pub fn compose(query: &str, context: &str) -> PromptMessages {
    PromptMessages {
        system: SYSTEM_PROMPT.to_string(),
        human: HUMAN_TEMPLATE
            .replace("{query}", query)
            .replace("{context}", context),
    }
}
