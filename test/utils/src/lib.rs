use serde_json::json;

pub fn models_fixture(ids: &[&str]) -> String {
    let data = ids
        .iter()
        .map(|id| {
            return json!({ "id": id, "object": "model", "owned_by": "openai" });
        })
        .collect::<Vec<_>>();

    return json!({ "object": "list", "data": data }).to_string();
}

pub fn completion_fixture(text: &str) -> String {
    return json!({
        "id": "cmpl-123",
        "object": "text_completion",
        "model": "text-davinci-003",
        "choices": [
            { "text": text, "index": 0, "logprobs": null, "finish_reason": "stop" },
            { "text": "ignored", "index": 1, "logprobs": null, "finish_reason": "stop" }
        ]
    })
    .to_string();
}

pub fn chat_completion_fixture(content: &str) -> String {
    return json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
    .to_string();
}

pub fn greeting_fixture() -> &'static str {
    return r#"
The following is a conversation with an AI assistant. The assistant is helpful, creative, clever, and very friendly.

user: Hello, who are you?
assistant: I am an AI created by OpenAI. How can I help you today?
user: "#
        .trim_start();
}
