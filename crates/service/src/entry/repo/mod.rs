pub mod memory;
pub mod seaorm;

pub use memory::MemoryEntryRepository;
pub use seaorm::SeaOrmEntryRepository;
