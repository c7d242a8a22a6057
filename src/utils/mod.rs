pub mod response; // Response builders
pub mod validator; // Request field validation
