use std::{
	cell::RefCell,
	collections::{hash_map::Entry, HashMap},
	rc::Rc,
};

use crate::{error::NameError, object::Object, token::Token};

/// Storage the interpreter reads variables from and writes assignments to.
///
/// Implementations are called re-entrantly: a callable invoked during one
/// evaluation may evaluate further expressions against the same bindings.
pub trait Bindings {
	fn get(&self, name: &Token) -> Result<Object, NameError>;

	/// Overwrites an existing binding and returns the stored value.
	fn assign(&mut self, name: &Token, value: Object) -> Result<Object, NameError>;

	/// Creates or replaces a binding in the innermost scope.
	fn define(&mut self, name: String, value: Object);
}

/// Shared handle to a scope. Cloning the pointer aliases the scope.
#[derive(Debug, Default, Clone)]
pub struct EnvironmentPointer(Rc<RefCell<Environment>>);

impl EnvironmentPointer {
	pub fn new(enclosing: EnvironmentPointer) -> Self {
		Self(Rc::new(RefCell::new(Environment::new(enclosing))))
	}

	pub fn enclosing(&self) -> Option<EnvironmentPointer> {
		self.0.borrow().enclosing.clone()
	}
}

impl Bindings for EnvironmentPointer {
	#[inline]
	fn get(&self, name: &Token) -> Result<Object, NameError> {
		self.0.borrow().get(name)
	}

	#[inline]
	fn assign(&mut self, name: &Token, value: Object) -> Result<Object, NameError> {
		self.0.borrow_mut().assign(name, value)
	}

	#[inline]
	fn define(&mut self, name: String, value: Object) {
		self.0.borrow_mut().define(name, value);
	}
}

#[derive(Debug, Default)]
struct Environment {
	enclosing: Option<EnvironmentPointer>,
	values: HashMap<String, Object>,
}

impl Environment {
	fn new(enclosing: EnvironmentPointer) -> Self {
		Self {
			enclosing: Some(enclosing),
			..Default::default()
		}
	}

	fn define(&mut self, name: String, value: Object) {
		self.values.insert(name, value);
	}

	fn get(&self, name: &Token) -> Result<Object, NameError> {
		if let Some(obj) = self.values.get(&name.lexeme) {
			Ok(obj.clone())
		} else if let Some(enclosing) = self.enclosing.as_ref() {
			enclosing.get(name)
		} else {
			Err(NameError::Undefined { name: name.clone() })
		}
	}

	fn assign(&mut self, name: &Token, value: Object) -> Result<Object, NameError> {
		match self.values.entry(name.lexeme.to_owned()) {
			Entry::Occupied(mut entry) => {
				entry.insert(value.clone());
				Ok(value)
			}
			Entry::Vacant(_) => {
				if let Some(enclosing) = self.enclosing.as_mut() {
					enclosing.assign(name, value)
				} else {
					Err(NameError::Undefined { name: name.clone() })
				}
			}
		}
	}
}
