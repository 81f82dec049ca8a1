//! Menu elements: one selectable, styled line, optionally bound to a command.
//!
//! A binding pairs a command (any `FnMut` taking positional values) with an
//! [`Args`] payload. The payload shape is tagged — no arguments, a single
//! value, or an ordered sequence — and is flattened to a `&[Value]` slice
//! when the element is dispatched. [`serde_json::Value`] is the value type,
//! so callers can bind arguments of arbitrary shape without the library
//! fixing an arity.

use std::fmt;
use std::slice;

use log::debug;
use serde_json::Value;

use crate::style::Style;

/// Error type produced by a failing bound command.
pub type CommandError = Box<dyn std::error::Error + Send + Sync>;

/// A command bound to an element. Receives the element's argument payload
/// as positional values, in order.
pub type Command = Box<dyn FnMut(&[Value]) -> Result<(), CommandError>>;

// ============================================================================
// ARGUMENT PAYLOAD
// ============================================================================

/// The argument payload attached to a bound command.
///
/// Resolved into a positional slice at dispatch time: `None` becomes an
/// empty slice, `One` a slice of one, `Many` the sequence itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Args {
    /// The command takes no arguments.
    #[default]
    None,
    /// A single positional value.
    One(Value),
    /// An ordered sequence of positional values.
    Many(Vec<Value>),
}

impl Args {
    /// The payload as positional values, in order.
    pub fn positional(&self) -> &[Value] {
        match self {
            Args::None => &[],
            Args::One(value) => slice::from_ref(value),
            Args::Many(values) => values,
        }
    }

    /// Number of positional values carried.
    pub fn len(&self) -> usize {
        self.positional().len()
    }

    /// True when the payload carries no values.
    pub fn is_empty(&self) -> bool {
        matches!(self, Args::None)
    }
}

impl From<Value> for Args {
    fn from(value: Value) -> Self {
        Args::One(value)
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Args::Many(values)
    }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// One selectable line in a page: a label, a style, and an optional binding.
///
/// Created through `Page::add_element` (or the `Ui::add_element` sugar),
/// which returns `&mut Element` so the caller can restyle or bind it after
/// insertion.
pub struct Element {
    /// Text shown for this element.
    pub label: String,
    /// Visual style applied to the whole rendered line.
    pub style: Style,
    binding: Option<Binding>,
}

struct Binding {
    command: Command,
    args: Args,
}

impl Element {
    pub(crate) fn new(label: impl Into<String>, style: Style) -> Element {
        Element {
            label: label.into(),
            style,
            binding: None,
        }
    }

    /// Bind a command taking no arguments.
    pub fn bind<F>(&mut self, command: F) -> &mut Element
    where
        F: FnMut(&[Value]) -> Result<(), CommandError> + 'static,
    {
        self.bind_with(command, Args::None)
    }

    /// Bind a command with an argument payload, replacing any prior binding.
    pub fn bind_with<F>(&mut self, command: F, args: Args) -> &mut Element
    where
        F: FnMut(&[Value]) -> Result<(), CommandError> + 'static,
    {
        self.binding = Some(Binding {
            command: Box::new(command),
            args,
        });
        self
    }

    /// Remove the bound command, if any.
    pub fn unbind(&mut self) {
        self.binding = None;
    }

    /// True when a command is bound to this element.
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Invoke the bound command with its payload unpacked positionally.
    ///
    /// Returns `Ok(false)` when no command is bound (selection is still
    /// valid, there is just nothing to run). Command failures propagate
    /// untouched — the caller decides what a failing command means.
    pub(crate) fn dispatch(&mut self) -> Result<bool, CommandError> {
        match &mut self.binding {
            Some(binding) => {
                debug!("dispatching {:?} with {} arg(s)", self.label, binding.args.len());
                (binding.command)(binding.args.positional())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Format this element as one menu line: `"<position>: <label>"`,
    /// right-aligned position, style applied to the whole line.
    pub fn render_line(&self, position: usize) -> String {
        self.style.apply(&format!("{position:2}: {}", self.label))
    }
}

// Command closures are opaque; show everything else.
impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("label", &self.label)
            .field("style", &self.style)
            .field("bound", &self.is_bound())
            .field(
                "args",
                &self.binding.as_ref().map(|b| &b.args),
            )
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde_json::json;

    use super::*;

    #[test]
    fn args_none_is_empty_slice() {
        assert_eq!(Args::None.positional(), &[] as &[Value]);
        assert!(Args::None.is_empty());
        assert_eq!(Args::None.len(), 0);
    }

    #[test]
    fn args_one_is_single_slice() {
        let args = Args::from(json!(42));
        assert_eq!(args.positional(), &[json!(42)]);
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn args_many_preserves_order() {
        let args = Args::from(vec![json!(2), json!(3), json!("x")]);
        assert_eq!(args.positional(), &[json!(2), json!(3), json!("x")]);
    }

    #[test]
    fn unbound_element_dispatches_nothing() {
        let mut element = Element::new("plain", Style::REGULAR);
        assert!(!element.is_bound());
        assert_eq!(element.dispatch().unwrap(), false);
    }

    #[test]
    fn dispatch_runs_command_exactly_once_with_args_in_order() {
        let calls: Rc<RefCell<Vec<Vec<Value>>>> = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&calls);

        let mut element = Element::new("add", Style::REGULAR);
        element.bind_with(
            move |args| {
                seen.borrow_mut().push(args.to_vec());
                Ok(())
            },
            Args::Many(vec![json!(2), json!(3)]),
        );

        assert!(element.is_bound());
        assert_eq!(element.dispatch().unwrap(), true);
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0], vec![json!(2), json!(3)]);
    }

    #[test]
    fn dispatch_propagates_command_failure() {
        let mut element = Element::new("boom", Style::REGULAR);
        element.bind(|_| Err("command exploded".into()));

        let err = element.dispatch().unwrap_err();
        assert!(err.to_string().contains("exploded"));
    }

    #[test]
    fn unbind_removes_binding() {
        let mut element = Element::new("once", Style::REGULAR);
        element.bind(|_| Ok(()));
        element.unbind();
        assert!(!element.is_bound());
    }

    #[test]
    fn style_is_mutable_after_creation() {
        let mut element = Element::new("hl", Style::REGULAR);
        element.style = Style::SELECTED;
        assert!(element.style.contains(Style::INVERTED));
    }

    #[test]
    fn render_line_is_one_based_and_aligned() {
        let element = Element::new("Banana", Style::REGULAR);
        assert_eq!(element.render_line(1), " 1: Banana");
        assert_eq!(element.render_line(12), "12: Banana");
    }

    #[test]
    fn render_line_applies_style() {
        let element = Element::new("Apple", Style::BOLD);
        let line = element.render_line(2);
        assert!(line.contains("Apple"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn debug_skips_the_command() {
        let mut element = Element::new("dbg", Style::BOLD);
        element.bind(|_| Ok(()));
        let text = format!("{element:?}");
        assert!(text.contains("dbg"));
        assert!(text.contains("bound: true"));
    }
}
