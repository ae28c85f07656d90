//! System prompts and request shape for summary calls.

use paperchat_ai::Message;

pub const SUMMARIZE_PROMPT: &str = "\
You are an expert summarizer. Your goal is to summarize the provided text as truthfully and concisely as possible.
DO NOT HALLUCINATE ANY FACTS.

You will provide a 1-paragraph summary up to 100 words, followed by a list 3-5 bullet points for the most important facts and takeaways of the article.

The user will provide a title for the paper and a title of the section, followed by the raw text of the entire webpage.
The main article will be an academic paper.

Within your summary and takeaways, emphasize or bold key words and phrases using markdown format.
Bold text is formatted as follows: `I just love **bold text**.`
Italic text is formatted as follows: `Italicized text is the *cat's meow*.`

Output format (unless empty):
```
<1-paragraph summary>

Key takeaways:
* <bullet point 1>
* <bullet point 2>
* <bullet point 3>
```
";

pub const REDUCE_PROMPT: &str = "\
You are an expert summarizer. Your goal is to summarize existing summaries as truthfully and concisely as possible.
DO NOT HALLUCINATE ANY FACTS. Add context as needed, but do not make up any facts.

Within your summary and takeaways, emphasize or bold key words and phrases using markdown format.
Bold text is formatted as follows: `I just love **bold text**.`
Italic text is formatted as follows: `Italicized text is the *cat's meow*.`

The user will provide the paper title and section title, followed by generated summaries of successive chunks of the section.
If there is no section title provided, then the summaries are from the entire paper.
Given multiple summaries and key takeaways, merge these into a 1-paragraph summary up to 100 words, followed by a list of up to 3-5 bullet points for the most important facts and takeaways of the article.

Output format (if summary available):
```
<1-paragraph summary>

Key takeaways:
* <bullet point 1>
* <bullet point 2>
* <bullet point 3>
```
";

/// System prompt followed by the paper title, section title and raw text.
pub fn build_messages(system: &str, paper_title: &str, section_title: &str, text: &str) -> Vec<Message> {
    vec![
        Message::system(system),
        Message::user(format!("Paper title: {paper_title}")),
        Message::user(format!("Section title: {section_title}")),
        Message::user(format!("Raw Text: ```{text}```")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperchat_ai::Role;

    #[test]
    fn request_shape() {
        let messages = build_messages(REDUCE_PROMPT, "Toolformer", "", "summary one\nsummary two");
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.starts_with("You are an expert summarizer."));
        assert_eq!(messages[1].content, "Paper title: Toolformer");
        assert_eq!(messages[2].content, "Section title: ");
        assert_eq!(messages[3].content, "Raw Text: ```summary one\nsummary two```");
        assert!(messages[1..].iter().all(|m| m.role == Role::User));
    }
}
