/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the declaration tree
///
/// Submodules:
/// - ast: Program, declaration and declarator nodes
/// - literals: Classified literal values
pub mod ast;
pub mod literals;

#[cfg(test)]
mod tests;
