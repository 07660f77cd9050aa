pub struct TicketsServiceConfig {
    /// Seats are numbered from 1 to seats_per_section
    pub seats_per_section: u32,
}
