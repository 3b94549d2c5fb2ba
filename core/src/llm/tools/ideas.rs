use crate::error::Result;
use crate::helper_utils::parse_list_items;
use crate::llm::client::{CompletionClient, CompletionRequest};
use crate::model::IdeaRequest;

const SYSTEM_CONTENT: &str = "You generate concise, insightful keywords or phrases for mind maps.";

const MAX_TOKENS: u32 = 50;
const TEMPERATURE: f64 = 0.7;

pub fn build_prompt(input: &str, expand: bool, limit: usize) -> String {
    if expand {
        format!(
            "Provide {limit} concise keywords or short phrases that expand upon the following concept:\n\n\
             \"{input}\"\n\n\
             Each should be no more than a few words, capturing the essence of an idea suitable for a mind map node."
        )
    } else {
        format!(
            "Generate {limit} concise and intelligent keywords or short phrases related to the following topic:\n\n\
             \"{input}\"\n\n\
             Each should be brief and to the point, ideal for labeling nodes in a mind map."
        )
    }
}

pub fn completion_request(req: &IdeaRequest) -> CompletionRequest {
    CompletionRequest {
        system: SYSTEM_CONTENT.to_string(),
        user: build_prompt(&req.input, req.expand, req.limit),
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

/// Asks the model for `req.limit` short mind-map labels.
///
/// The reply is read as a line list: bullets and numbering are stripped, blank
/// lines skipped, and the result cut to `req.limit` entries. A zero limit
/// returns immediately without calling the model.
pub async fn generate_ideas(client: &dyn CompletionClient, req: &IdeaRequest) -> Result<Vec<String>> {
    if req.limit == 0 {
        return Ok(Vec::new());
    }

    let reply = client.complete(completion_request(req)).await?;
    tracing::debug!(reply = %reply, "raw idea completion");

    let ideas = parse_list_items(&reply, req.limit);
    tracing::info!(
        expand = req.expand,
        limit = req.limit,
        count = ideas.len(),
        "ideas generated"
    );
    Ok(ideas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CompletionError, Error};
    use crate::llm::tools::testing::ScriptedClient;

    #[test]
    fn test_build_prompt_expand() {
        let prompt = build_prompt("Machine Learning", true, 4);
        assert!(prompt.starts_with("Provide 4 concise keywords"));
        assert!(prompt.contains("expand upon the following concept"));
        assert!(prompt.contains("\"Machine Learning\""));
    }

    #[test]
    fn test_build_prompt_new_topic() {
        let prompt = build_prompt("Gardening", false, 3);
        assert!(prompt.starts_with("Generate 3 concise and intelligent keywords"));
        assert!(prompt.contains("related to the following topic"));
        assert!(prompt.contains("\"Gardening\""));
    }

    #[test]
    fn test_completion_request_parameters() {
        let request = completion_request(&IdeaRequest::new("x", false, 3));
        assert_eq!(request.system, SYSTEM_CONTENT);
        assert_eq!(request.max_tokens, 50);
        assert_eq!(request.temperature, 0.7);
    }

    #[tokio::test]
    async fn test_generate_ideas_strips_markers() {
        let client = ScriptedClient::replying("1. Foo\n- Bar\n\n3) Baz");
        let ideas = generate_ideas(&client, &IdeaRequest::new("topic", false, 3))
            .await
            .unwrap();
        assert_eq!(ideas, vec!["Foo", "Bar", "Baz"]);
        assert_eq!(client.call_count(), 1);
        assert!(client.last_call().user.contains("\"topic\""));
    }

    #[tokio::test]
    async fn test_generate_ideas_respects_limit() {
        let client = ScriptedClient::replying("1. a\n2. b\n3. c\n4. d\n5. e\n6. f");
        for limit in 1..=5 {
            let ideas = generate_ideas(&client, &IdeaRequest::new("topic", true, limit))
                .await
                .unwrap();
            assert!(ideas.len() <= limit);
        }
    }

    #[tokio::test]
    async fn test_generate_ideas_zero_limit_skips_call() {
        let client = ScriptedClient::replying("1. a");
        let ideas = generate_ideas(&client, &IdeaRequest::new("topic", false, 0))
            .await
            .unwrap();
        assert!(ideas.is_empty());
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_ideas_propagates_completion_failure() {
        let client = ScriptedClient::failing();
        let err = generate_ideas(&client, &IdeaRequest::new("topic", false, 3))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Completion(CompletionError::Api { status: 429, .. })
        ));
    }
}
