//! Command dispatch: method name + argument bundle in, outcome out.
//!
//! The scripting bridge hands each call here by name. Unknown names resolve
//! to `NotImplemented`; malformed bundles resolve to `Failed`. Nothing
//! panics across the protocol boundary.

use tracing::{debug, warn};

use crate::protocol::{CommandArgs, Outcome, Reply, Responder};
use crate::service::{FrameRequest, WindowService};
use crate::toolkit::WindowToolkit;

pub struct CommandDispatcher<T: WindowToolkit> {
    service: WindowService<T>,
}

impl<T: WindowToolkit> CommandDispatcher<T> {
    pub fn new(service: WindowService<T>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &WindowService<T> {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut WindowService<T> {
        &mut self.service
    }

    pub fn into_service(self) -> WindowService<T> {
        self.service
    }

    /// Dispatch one command. The responder always fires before this returns,
    /// except for `openWebView` with a non-empty message channel, whose
    /// reply is deferred until the page posts.
    pub fn dispatch(&mut self, method: &str, args: serde_json::Value, responder: Responder) {
        let args = match CommandArgs::from_value(args) {
            Ok(args) => args,
            Err(err) => {
                warn!(method = %method, error = %err, "malformed argument bundle");
                responder.respond(Outcome::Failed {
                    message: format!("malformed arguments: {err}"),
                });
                return;
            }
        };
        debug!(method = %method, key = args.key.as_deref().unwrap_or(""), "dispatch");

        match method {
            "createWindow" => {
                let Some(key) = args.key.clone() else {
                    responder.respond(missing_arg("key"));
                    return;
                };
                let outcome = match self.service.create_window(&key, frame_request(&args)) {
                    Ok(()) => Outcome::Success(Reply::Bool(true)),
                    Err(err) => Outcome::Failed {
                        message: err.to_string(),
                    },
                };
                responder.respond(outcome);
            }
            "openWebView" | "createWebWindow" => {
                let Some(key) = args.key.clone() else {
                    responder.respond(missing_arg("key"));
                    return;
                };
                let Some(url) = args.url.clone() else {
                    responder.respond(missing_arg("url"));
                    return;
                };
                let js_message = args.js_message.clone().unwrap_or_default();
                self.service
                    .create_web_window(&key, &url, &js_message, frame_request(&args), responder);
            }
            "closeWindow" | "closeWebView" => {
                let key = args.key.unwrap_or_default();
                responder.respond(Outcome::Success(Reply::Bool(
                    self.service.close_window(&key),
                )));
            }
            "windowCount" => {
                responder.respond(Outcome::Success(Reply::Int(
                    self.service.window_count() as i64
                )));
            }
            "keyIndex" => {
                // Missing key behaves like an unmatched key: index 0.
                let key = args.key.unwrap_or_default();
                responder.respond(Outcome::Success(Reply::Int(
                    self.service.key_index(&key) as i64
                )));
            }
            "getWindowStats" => {
                let key = args.key.unwrap_or_default();
                let outcome = match self.service.window_stats(&key) {
                    Ok(stats) => Outcome::Success(Reply::Stats(stats)),
                    Err(_) => Outcome::NotFound { key },
                };
                responder.respond(outcome);
            }
            "moveWindow" => {
                let key = args.key.unwrap_or_default();
                let (Some(x), Some(y)) = (args.x, args.y) else {
                    responder.respond(missing_arg("x/y"));
                    return;
                };
                let outcome = match self.service.move_window(&key, x, y) {
                    Ok(()) => Outcome::Success(Reply::Bool(true)),
                    Err(_) => Outcome::NotFound { key },
                };
                responder.respond(outcome);
            }
            "resizeWindow" => {
                let key = args.key.unwrap_or_default();
                let (Some(width), Some(height)) = (args.width, args.height) else {
                    responder.respond(missing_arg("width/height"));
                    return;
                };
                let outcome = match self.service.resize_window(&key, width, height) {
                    Ok(()) => Outcome::Success(Reply::Bool(true)),
                    Err(_) => Outcome::NotFound { key },
                };
                responder.respond(outcome);
            }
            "lastWindowKey" => {
                let reply = match self.service.last_window_key() {
                    Some(key) => Reply::Text(key),
                    None => Reply::Null,
                };
                responder.respond(Outcome::Success(reply));
            }
            _ => {
                debug!(method = %method, "unrecognized command");
                responder.respond(Outcome::NotImplemented);
            }
        }
    }
}

fn frame_request(args: &CommandArgs) -> FrameRequest {
    FrameRequest {
        x: args.x,
        y: args.y,
        width: args.width,
        height: args.height,
    }
}

fn missing_arg(name: &str) -> Outcome {
    Outcome::Failed {
        message: format!("missing required argument: {name}"),
    }
}
