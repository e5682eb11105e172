mod player_criteria;
mod player_options;
mod player_record;

pub use player_criteria::PlayerCriteria;
pub use player_options::PlayerOptions;
pub use player_record::PlayerRecord;
