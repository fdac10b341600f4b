use super::{progress, render, CallableTrait, CliError};
use crate::flows::{FlowError, Flows};
use crate::forms::ai::{
    ChatMessage, ChatRequest, ChatRole, IdeaRequest, ImageRequest, RoadmapRequest,
};
use async_trait::async_trait;
use std::path::PathBuf;

// Longest history the chat flow accepts
const MAX_HISTORY: usize = 200;

fn finish<T>(pb: &indicatif::ProgressBar, result: &Result<T, FlowError>, done: &str) {
    match result {
        Ok(_) => progress::finish_success(pb, done),
        Err(err) => progress::finish_error(pb, err.kind()),
    }
}

/// `eventra ideas --skills <SKILLS> --job-role <ROLE>`
pub struct IdeasCommand {
    pub request: IdeaRequest,
    pub json: bool,
}

#[async_trait]
impl CallableTrait for IdeasCommand {
    async fn call(&self, flows: &Flows) -> Result<(), CliError> {
        let pb = progress::spinner("Generating project ideas...");
        let result = flows.ideas.run(&self.request).await;
        finish(&pb, &result, "Project ideas ready");
        let ideas = result?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&ideas)?);
        } else {
            print!("{}", render::ideas(&ideas));
        }
        Ok(())
    }
}

/// `eventra roadmap --title .. --description .. --skills .. --job-role ..`
pub struct RoadmapCommand {
    pub request: RoadmapRequest,
    pub json: bool,
}

#[async_trait]
impl CallableTrait for RoadmapCommand {
    async fn call(&self, flows: &Flows) -> Result<(), CliError> {
        let pb = progress::spinner("Generating project roadmap...");
        let result = flows.roadmap.run(&self.request).await;
        finish(&pb, &result, "Roadmap ready");
        let roadmap = result?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&roadmap)?);
        } else {
            print!("{}", render::roadmap(&roadmap));
        }
        Ok(())
    }
}

/// `eventra image --name .. --description .. [--out FILE]`
pub struct ImageCommand {
    pub request: ImageRequest,
    pub out: Option<PathBuf>,
    pub json: bool,
}

#[async_trait]
impl CallableTrait for ImageCommand {
    async fn call(&self, flows: &Flows) -> Result<(), CliError> {
        let pb = progress::spinner("Generating event banner...");
        let result = flows.image.run(&self.request).await;
        finish(&pb, &result, "Banner ready");
        let image = result?;

        match &self.out {
            Some(path) => {
                let (mime, bytes) = render::decode_data_uri(&image.image_url)?;
                std::fs::write(path, &bytes)?;
                tracing::info!(path = %path.display(), mime = %mime, "Banner saved");
                println!("Saved {} ({}, {} bytes)", path.display(), mime, bytes.len());
            }
            None if self.json => println!("{}", serde_json::to_string_pretty(&image)?),
            None => println!("{}", image.image_url),
        }
        Ok(())
    }
}

/// Interactive assistant. The conversation history lives here, the flow only
/// reads it for each turn.
pub struct ChatCommand {
    pub json: bool,
}

impl ChatCommand {
    // answers have no length bound, history messages do
    fn remember(history: &mut Vec<ChatMessage>, question: &str, answer: &str) {
        history.push(ChatMessage::clipped(ChatRole::User, question));
        history.push(ChatMessage::clipped(ChatRole::Assistant, answer));
        if history.len() > MAX_HISTORY {
            let excess = history.len() - MAX_HISTORY;
            history.drain(..excess);
        }
    }
}

#[async_trait]
impl CallableTrait for ChatCommand {
    async fn call(&self, flows: &Flows) -> Result<(), CliError> {
        println!("Eventra assistant. Empty line or \"exit\" to quit.");
        let mut history: Vec<ChatMessage> = Vec::new();

        loop {
            let question: String = dialoguer::Input::new()
                .with_prompt("You")
                .allow_empty(true)
                .interact_text()?;
            let question = question.trim().to_string();
            if question.is_empty() || question == "exit" || question == "quit" {
                break;
            }

            let request = ChatRequest {
                history: history.clone(),
                question: question.clone(),
            };
            let pb = progress::spinner("Thinking...");
            let result = flows.chat.run(&request).await;
            pb.finish_and_clear();

            match result {
                Ok(response) if self.json => {
                    println!("{}", serde_json::to_string(&response)?);
                    Self::remember(&mut history, &question, &response.answer);
                }
                Ok(response) => {
                    println!("Assistant: {}", response.answer);
                    Self::remember(&mut history, &question, &response.answer);
                }
                // a failed turn does not end the conversation
                Err(err) => eprintln!("Error: {} ({})", err, err.kind()),
            }
        }
        Ok(())
    }
}
