use std::cell::RefCell;
use std::rc::Rc;

use super::*;

/// A field with a private list of error nodes.
#[derive(Default)]
struct FakeField {
    value: String,
    error_nodes: Vec<String>,
    border: Option<&'static str>,
    fail: bool,
}

impl FakeField {
    fn with(value: &str) -> Self {
        Self { value: value.to_owned(), ..Self::default() }
    }
}

impl RequiredField for FakeField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn show_error(&mut self, message: &str) -> Result<(), DomError> {
        if self.fail {
            return Err(DomError::Js("detached".to_owned()));
        }
        match self.error_nodes.first_mut() {
            Some(node) => *node = message.to_owned(),
            None => self.error_nodes.push(message.to_owned()),
        }
        self.border = Some(ACCENT);
        Ok(())
    }

    fn clear_error(&mut self) -> Result<(), DomError> {
        self.error_nodes.clear();
        self.border = None;
        Ok(())
    }
}

#[test]
fn verdict_trims_whitespace() {
    assert_eq!(FieldVerdict::of(""), FieldVerdict::Blank);
    assert_eq!(FieldVerdict::of("  \n\t"), FieldVerdict::Blank);
    assert_eq!(FieldVerdict::of(" a "), FieldVerdict::Filled);
}

#[test]
fn empty_required_field_blocks_submit_with_one_error() {
    let mut fields = vec![FakeField::with("Ada"), FakeField::with("   ")];
    let (report, result) = validate_form(&mut fields);
    assert!(result.is_ok());
    assert!(!report.is_valid());
    assert_eq!(report.blank_count(), 1);
    assert!(fields[0].error_nodes.is_empty());
    assert_eq!(fields[1].error_nodes, vec![REQUIRED_MESSAGE.to_owned()]);
    assert_eq!(fields[1].border, Some("var(--accent-color)"));
}

#[test]
fn repeated_submits_reuse_the_error_node() {
    let mut fields = vec![FakeField::with("")];
    let _ = validate_form(&mut fields);
    let _ = validate_form(&mut fields);
    let _ = validate_form(&mut fields);
    assert_eq!(fields[0].error_nodes.len(), 1);
}

#[test]
fn correcting_the_field_clears_the_error() {
    let mut fields = vec![FakeField::with("")];
    let (first, _) = validate_form(&mut fields);
    assert!(!first.is_valid());

    fields[0].value = "hello@example.com".to_owned();
    let (second, _) = validate_form(&mut fields);
    assert!(second.is_valid());
    assert!(fields[0].error_nodes.is_empty());
    assert_eq!(fields[0].border, None);
}

#[test]
fn form_without_required_fields_is_valid() {
    let mut fields: Vec<FakeField> = Vec::new();
    let (report, _) = validate_form(&mut fields);
    assert!(report.is_valid());
}

#[test]
fn dom_failure_is_reported_but_every_field_is_checked() {
    let mut broken = FakeField::with("");
    broken.fail = true;
    let mut fields = vec![broken, FakeField::with("")];
    let (report, result) = validate_form(&mut fields);
    assert!(result.is_err());
    assert_eq!(report.blank_count(), 2);
    assert_eq!(fields[1].error_nodes.len(), 1);
}

// =============================================================
// Fields sharing one parent
// =============================================================

#[derive(Clone, Debug, PartialEq)]
enum Child {
    Field(usize),
    Error(String),
}

/// A field living in a shared child list, with its error node kept as the
/// next sibling the way the page does it.
struct SiblingField {
    id: usize,
    value: String,
    parent: Rc<RefCell<Vec<Child>>>,
}

impl SiblingField {
    fn slot_after(&self, children: &[Child]) -> usize {
        children.iter().position(|c| *c == Child::Field(self.id)).unwrap() + 1
    }
}

impl RequiredField for SiblingField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn show_error(&mut self, message: &str) -> Result<(), DomError> {
        let mut children = self.parent.borrow_mut();
        let at = self.slot_after(&children);
        match children.get_mut(at) {
            Some(Child::Error(existing)) => *existing = message.to_owned(),
            _ => children.insert(at, Child::Error(message.to_owned())),
        }
        Ok(())
    }

    fn clear_error(&mut self) -> Result<(), DomError> {
        let mut children = self.parent.borrow_mut();
        let at = self.slot_after(&children);
        if matches!(children.get(at), Some(Child::Error(_))) {
            children.remove(at);
        }
        Ok(())
    }
}

fn form_with(values: &[&str]) -> (Rc<RefCell<Vec<Child>>>, Vec<SiblingField>) {
    let parent = Rc::new(RefCell::new((0..values.len()).map(Child::Field).collect::<Vec<_>>()));
    let fields = values
        .iter()
        .enumerate()
        .map(|(id, value)| SiblingField { id, value: (*value).to_owned(), parent: Rc::clone(&parent) })
        .collect();
    (parent, fields)
}

fn error_count(parent: &Rc<RefCell<Vec<Child>>>) -> usize {
    parent.borrow().iter().filter(|c| matches!(c, Child::Error(_))).count()
}

#[test]
fn blank_siblings_each_get_their_own_error() {
    let (parent, mut fields) = form_with(&["", ""]);
    let (report, _) = validate_form(&mut fields);
    assert_eq!(report.blank_count(), 2);
    assert_eq!(error_count(&parent), 2);
    assert_eq!(
        *parent.borrow(),
        vec![
            Child::Field(0),
            Child::Error(REQUIRED_MESSAGE.to_owned()),
            Child::Field(1),
            Child::Error(REQUIRED_MESSAGE.to_owned()),
        ]
    );
}

#[test]
fn filled_sibling_keeps_blank_fields_error() {
    let (parent, mut fields) = form_with(&["", "x"]);
    let (report, _) = validate_form(&mut fields);
    assert!(!report.is_valid());
    assert_eq!(
        *parent.borrow(),
        vec![Child::Field(0), Child::Error(REQUIRED_MESSAGE.to_owned()), Child::Field(1)]
    );
}

#[test]
fn resubmitting_shared_parent_form_does_not_duplicate_errors() {
    let (parent, mut fields) = form_with(&["", "", "ok"]);
    let _ = validate_form(&mut fields);
    let _ = validate_form(&mut fields);
    assert_eq!(error_count(&parent), 2);

    fields[0].value = "fixed".to_owned();
    let _ = validate_form(&mut fields);
    assert_eq!(
        *parent.borrow(),
        vec![Child::Field(0), Child::Field(1), Child::Error(REQUIRED_MESSAGE.to_owned()), Child::Field(2)]
    );
}
