use super::language::Language;

/// Instruction sent as the system message on every request.
///
/// The "return only the translated sentence" contract is trust-based:
/// nothing downstream parses or validates the model's reply.
pub const SYSTEM_PROMPT: &str = "You are a smart multilingual translator.\n\
     Your task:\n\
     1. Detect the input language\n\
     2. Translate the sentence into the user-specified target language\n\
     3. Return only the translated sentence (no extra explanation)\n\
     \n\
     If the input is in Roman Urdu, treat it as Urdu and translate properly.";

/// Builds the user message for one translation request.
pub fn build_user_prompt(source_text: &str, target_language: Language) -> String {
    format!("Sentence: {source_text}\nTranslate to: {target_language}")
}
