//! Implementation of `#[derive(FieldDecorator)]`.

mod attrs;
mod crate_path;
mod expand;

#[cfg(test)]
mod tests;

pub(crate) use expand::expand;
