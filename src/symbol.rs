use intaglio::SymbolTable as Interner;


/// The table of declared variable names: a flat, unscoped, growing set
/// supporting membership test and insertion only.
///
/// Each translation run owns exactly one table, built fresh at run start and
/// discarded at run end. It is never shared between runs.
#[derive(Debug)]
pub struct SymbolTable(Interner);


impl SymbolTable {
	/// Create an empty table. Please note that this allocates memory even if no names are
	/// inserted.
	pub fn new() -> Self {
		Self(Interner::new())
	}


	/// Check whether a name has been declared.
	pub fn is_declared(&self, name: &str) -> bool {
		self.0.check_interned(name).is_some()
	}


	/// Declare a name. Returns false if the name was already declared, in which case the
	/// table is left untouched.
	pub fn declare(&mut self, name: &str) -> bool {
		if self.is_declared(name) {
			return false;
		}

		self.0
			.intern(name.to_owned())
			.expect("failed to intern symbol");

		true
	}


	/// The number of declared names.
	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.0.len()
	}
}


#[cfg(test)]
mod tests {
	use super::*;


	#[test]
	fn test_declare_is_idempotent_on_lookup() {
		let mut table = SymbolTable::new();

		assert!(!table.is_declared("x"));
		assert!(table.declare("x"));
		assert!(table.is_declared("x"));
		assert!(!table.declare("x"));
		assert_eq!(table.len(), 1);
	}
}
