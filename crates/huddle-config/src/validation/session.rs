use crate::schema::HuddleConfig;

use super::helpers::validate_non_empty;

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &HuddleConfig) {
    validate_non_empty(errors, "session.room_id", &config.session.room_id);
    validate_non_empty(errors, "session.user_id", &config.session.user_id);
}
