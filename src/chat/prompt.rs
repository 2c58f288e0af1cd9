use crate::config::ChatConfig;
use crate::llm::{CompletionOptions, Message};

const PERSONA: &str = "\
You are an AI travel buddy specializing in budget-friendly journeys across INDIA ONLY. \
Behave like an expert Indian travel guide.
NEVER suggest foreign destinations unless the user asks specifically.
If the user requests an itinerary:
- For 3-4 day itineraries (traveler mode), provide a COMPLETE detailed plan with: \
day-wise breakdown, best time to visit each place, local food recommendations (old food shops \
and trendy cafes), transport methods, estimated budget, stay options, safety tips, local insights \
and hidden gems.
- For 1-day itineraries (normal mode), provide a quick sightseeing route focusing on the best attractions.
- Make responses ENGAGING and exciting, but still practical and helpful.
- Always keep responses structured and easy to read.";

const ITINERARY_DIRECTIVE: &str =
    "The traveller is asking for an itinerary: follow the itinerary rules above in full.";

const CONVERSATION_DIRECTIVE: &str =
    "The traveller is not asking for an itinerary: answer briefly and conversationally.";

pub fn is_itinerary_request(message: &str) -> bool {
    message.to_lowercase().contains("itinerary")
}

pub fn system_prompt(itinerary: bool) -> String {
    let directive = if itinerary {
        ITINERARY_DIRECTIVE
    } else {
        CONVERSATION_DIRECTIVE
    };
    format!("{}\n\n{}", PERSONA, directive)
}

/// Messages and sampling options for one chat turn.
pub fn build_request(config: &ChatConfig, message: &str) -> (Vec<Message>, CompletionOptions) {
    let itinerary = is_itinerary_request(message);
    let max_tokens = if itinerary {
        config.itinerary_max_tokens
    } else {
        config.max_tokens
    };

    let messages = vec![
        Message::system(system_prompt(itinerary)),
        Message::user(message),
    ];
    let options = CompletionOptions {
        max_tokens: Some(max_tokens),
        temperature: None,
    };
    (messages, options)
}
