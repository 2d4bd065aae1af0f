pub mod test_components;
