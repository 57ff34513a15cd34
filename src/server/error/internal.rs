use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A booking row carries status text outside the known set.
    ///
    /// Bookings are only ever written through `BookingStatus`, so this means
    /// the data was modified out of band. Results in a 500 Internal Server
    /// Error with a generic message returned to the client.
    #[error("Unknown status '{value}' stored for booking {id}")]
    UnknownBookingStatus {
        /// The booking row carrying the unexpected status.
        id: i32,
        /// The status text that failed to parse.
        value: String,
    },
}
