//! Command registration and dispatch.
//!
//! Commands are closures keyed by name. Handlers write their output through
//! the scrollback they are handed, so a handler can print freely but cannot
//! reach back into the registry while it runs.

use std::collections::HashMap;

use crate::scrollback::Scrollback;

/// A command implementation. Receives the arguments after the command name
/// (quotes retained) and the console output sink.
pub type CommandHandler = Box<dyn FnMut(&[String], &mut Scrollback)>;

/// Name-to-handler table for console commands.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandHandler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`.
    ///
    /// Refuses to replace an existing registration; the outcome is reported
    /// as a line on `out` either way and the return value says whether the
    /// handler was stored.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: CommandHandler,
        out: &mut Scrollback,
    ) -> bool {
        let name = name.into();
        if self.commands.contains_key(&name) {
            out.push(format!(
                "Cannot register \"{name}\", a command is already registered with that name."
            ));
            return false;
        }
        out.push(format!("Registered console command \"{name}\""));
        log::debug!("registered console command {name:?}");
        self.commands.insert(name, handler);
        true
    }

    /// Remove the handler registered under `name`, reporting on `out`.
    pub fn unregister(&mut self, name: &str, out: &mut Scrollback) -> bool {
        if self.commands.remove(name).is_none() {
            out.push(format!(
                "Cannot unregister \"{name}\", a command with that name does not exist."
            ));
            return false;
        }
        out.push(format!("Unregistered console command \"{name}\""));
        log::debug!("unregistered console command {name:?}");
        true
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run the handler registered under `name`, giving it `args` (the
    /// tokens after the command name) and `out` to print to. Returns false
    /// when no such command exists; the caller decides how to report that.
    pub fn dispatch(&mut self, name: &str, args: &[String], out: &mut Scrollback) -> bool {
        let Some(handler) = self.commands.get_mut(name) else {
            return false;
        };
        handler(args, out);
        true
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn noop() -> CommandHandler {
        Box::new(|_, _| {})
    }

    #[test]
    fn register_reports_success() {
        let mut reg = CommandRegistry::new();
        let mut out = Scrollback::new();
        assert!(reg.register("greet", noop(), &mut out));
        assert!(reg.is_registered("greet"));
        assert_eq!(out.visible_window(10), [
            "Registered console command \"greet\""
        ]);
    }

    #[test]
    fn duplicate_register_is_rejected_with_diagnostic() {
        let mut reg = CommandRegistry::new();
        let mut out = Scrollback::new();
        reg.register("greet", noop(), &mut out);
        assert!(!reg.register("greet", noop(), &mut out));
        assert_eq!(reg.len(), 1);
        assert_eq!(
            out.visible_window(10).last().map(String::as_str),
            Some("Cannot register \"greet\", a command is already registered with that name.")
        );
    }

    #[test]
    fn unregister_removes_and_reports() {
        let mut reg = CommandRegistry::new();
        let mut out = Scrollback::new();
        reg.register("greet", noop(), &mut out);
        assert!(reg.unregister("greet", &mut out));
        assert!(!reg.is_registered("greet"));
        assert_eq!(
            out.visible_window(10).last().map(String::as_str),
            Some("Unregistered console command \"greet\"")
        );
    }

    #[test]
    fn unregister_unknown_is_rejected_with_diagnostic() {
        let mut reg = CommandRegistry::new();
        let mut out = Scrollback::new();
        assert!(!reg.unregister("ghost", &mut out));
        assert_eq!(
            out.visible_window(10).last().map(String::as_str),
            Some("Cannot unregister \"ghost\", a command with that name does not exist.")
        );
    }

    #[test]
    fn name_freed_by_unregister_can_be_reused() {
        let mut reg = CommandRegistry::new();
        let mut out = Scrollback::new();
        reg.register("greet", noop(), &mut out);
        reg.unregister("greet", &mut out);
        assert!(reg.register("greet", noop(), &mut out));
    }

    #[test]
    fn dispatch_passes_arguments_without_the_name() {
        let mut reg = CommandRegistry::new();
        let mut out = Scrollback::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        reg.register(
            "set",
            Box::new(move |args, _| {
                sink.borrow_mut().extend(args.iter().cloned());
            }),
            &mut out,
        );
        let args = vec!["5".to_string()];
        assert!(reg.dispatch("set", &args, &mut out));
        assert_eq!(*seen.borrow(), args);
    }

    #[test]
    fn dispatch_keeps_quotes_in_arguments() {
        let mut reg = CommandRegistry::new();
        let mut out = Scrollback::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        reg.register(
            "say",
            Box::new(move |args, _| {
                sink.borrow_mut().extend(args.iter().cloned());
            }),
            &mut out,
        );
        let args = vec!["\"hello world\"".to_string()];
        assert!(reg.dispatch("say", &args, &mut out));
        assert_eq!(*seen.borrow(), args);
    }

    #[test]
    fn dispatch_with_no_arguments_passes_empty_slice() {
        let mut reg = CommandRegistry::new();
        let mut out = Scrollback::new();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        reg.register(
            "ping",
            Box::new(move |args, _| {
                *sink.borrow_mut() = Some(args.len());
            }),
            &mut out,
        );
        assert!(reg.dispatch("ping", &[], &mut out));
        assert_eq!(*seen.borrow(), Some(0));
    }

    #[test]
    fn dispatch_unknown_returns_false_silently() {
        let mut reg = CommandRegistry::new();
        let mut out = Scrollback::new();
        assert!(!reg.dispatch("ghost", &[], &mut out));
        assert!(out.is_empty());
    }

    #[test]
    fn handler_output_lands_in_scrollback() {
        let mut reg = CommandRegistry::new();
        let mut out = Scrollback::new();
        reg.register(
            "hi",
            Box::new(|_, out| out.push("hello there")),
            &mut out,
        );
        out.clear();
        reg.dispatch("hi", &[], &mut out);
        assert_eq!(out.visible_window(10), ["hello there"]);
    }

    #[test]
    fn names_are_sorted() {
        let mut reg = CommandRegistry::new();
        let mut out = Scrollback::new();
        reg.register("zeta", noop(), &mut out);
        reg.register("alpha", noop(), &mut out);
        reg.register("mid", noop(), &mut out);
        assert_eq!(reg.names(), ["alpha", "mid", "zeta"]);
    }
}
