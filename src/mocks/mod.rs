//! Mock implementations for testing
//!
//! Services and the client facade are exercised against [`MockHttpTransport`]
//! so that request assembly, status branching and decoding can be checked
//! without opening a socket.


#[cfg(test)]
pub use mock_transport::MockHttpTransport;
