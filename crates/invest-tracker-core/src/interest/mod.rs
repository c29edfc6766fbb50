pub mod expected_return;
