//! The drinklog API user: register and log in once, then repeatedly create
//! and delete dated records, occasionally browsing a month view.

use goose::prelude::*;

use drinklog_core::api::{
    CreateRecordRequest, LoginRequest, LoginResponse, SignupRequest, LOGIN_PATH, LOGOUT_PATH,
    RECORDS_PATH, SIGNUP_PATH,
};
use drinklog_core::identity::{VirtualUserIdentity, IDENTITIES};
use drinklog_core::records::{
    month_path, record_date, record_epoch, CycleCounter, DatedRecordKey, CYCLE_RECORD_TYPE,
};
use drinklog_core::session::AuthSession;

/// Context owned by one virtual user for its whole lifetime.
///
/// Stored as goose session data; transactions for the same user run
/// strictly sequentially, so no further synchronization is needed.
#[derive(Debug)]
pub struct UserState {
    pub identity: VirtualUserIdentity,
    pub session: AuthSession,
    pub cycles: CycleCounter,
}

impl UserState {
    fn new(identity: VirtualUserIdentity) -> Self {
        Self {
            identity,
            session: AuthSession::new(),
            cycles: CycleCounter::new(),
        }
    }
}

/// Build the scenario registered with the goose attack.
pub fn scenario() -> Result<Scenario, GooseError> {
    Ok(scenario!("ApiUser")
        .register_transaction(transaction!(bootstrap_session).set_on_start())
        .register_transaction(transaction!(record_cycle).set_weight(5)?)
        .register_transaction(transaction!(browse_month).set_weight(1)?)
        .register_transaction(transaction!(logout).set_on_stop()))
}

/// Register an account and log in, keeping the bearer token for the rest of
/// the user's lifetime. Runs once, before any other transaction.
async fn bootstrap_session(user: &mut GooseUser) -> TransactionResult {
    let identity = VirtualUserIdentity::allocate(&IDENTITIES);
    tracing::debug!(index = identity.index, "virtual user starting");

    let signup = SignupRequest::for_identity(&identity);
    let login = LoginRequest::for_identity(&identity);
    // State exists before any request goes out, so the repeated
    // transactions always find it even when bootstrap requests fail.
    user.set_session_data(UserState::new(identity));

    // Best effort: a duplicate username left over from an earlier run is
    // tolerated, like any other non-success response.
    let request_builder = user
        .get_request_builder(&GooseMethod::Post, SIGNUP_PATH)?
        .json(&signup);
    let signup_request = GooseRequest::builder()
        .set_request_builder(request_builder)
        .build();
    user.request(signup_request).await?;

    let request_builder = user
        .get_request_builder(&GooseMethod::Post, LOGIN_PATH)?
        .json(&login);
    let login_request = GooseRequest::builder()
        .set_request_builder(request_builder)
        .build();
    let goose = user.request(login_request).await?;

    if let Ok(response) = goose.response {
        if response.status() == 200 {
            match response.json::<LoginResponse>().await {
                Ok(tokens) => {
                    if let Some(state) = user.get_session_data_mut::<UserState>() {
                        state.session.authenticate(tokens);
                    }
                }
                Err(error) => {
                    tracing::warn!(%error, "login returned 200 but the token body did not parse");
                }
            }
        }
    }

    Ok(())
}

/// One create-then-delete round trip against the records endpoint.
///
/// The per-user counter advances first, so every invocation targets a date
/// this user has never created before.
async fn record_cycle(user: &mut GooseUser) -> TransactionResult {
    let Some(state) = user.get_session_data_mut::<UserState>() else {
        return Ok(());
    };
    let cycle = state.cycles.advance();
    let authorization = state.session.authorization_header();

    let date = match record_date(cycle) {
        Ok(date) => date,
        Err(error) => {
            tracing::error!(%error, "skipping record cycle");
            return Ok(());
        }
    };

    let record = CreateRecordRequest::for_cycle(date);
    let request_builder = user
        .get_request_builder(&GooseMethod::Post, RECORDS_PATH)?
        .header("Authorization", authorization.as_str())
        .json(&record);
    let create = GooseRequest::builder()
        .set_request_builder(request_builder)
        .build();
    user.request(create).await?;

    let key = DatedRecordKey {
        date,
        record_type: CYCLE_RECORD_TYPE,
    };
    let request_builder = user
        .get_request_builder(&GooseMethod::Delete, &key.delete_path())?
        .header("Authorization", authorization.as_str());
    let delete = GooseRequest::builder()
        .set_request_builder(request_builder)
        .build();
    user.request(delete).await?;

    Ok(())
}

/// Fetch the month the user's latest record landed in, the way the web
/// client loads its calendar view.
async fn browse_month(user: &mut GooseUser) -> TransactionResult {
    let Some(state) = user.get_session_data::<UserState>() else {
        return Ok(());
    };
    let authorization = state.session.authorization_header();
    let cycle = state.cycles.current().max(1);

    let date = record_date(cycle).unwrap_or_else(|_| record_epoch());
    let request_builder = user
        .get_request_builder(&GooseMethod::Get, &month_path(date))?
        .header("Authorization", authorization.as_str());
    let browse = GooseRequest::builder()
        .set_request_builder(request_builder)
        .build();
    user.request(browse).await?;

    Ok(())
}

/// Blacklist the session tokens when the engine stops this user.
/// Users that never authenticated have nothing to invalidate.
async fn logout(user: &mut GooseUser) -> TransactionResult {
    let Some(request) = user
        .get_session_data::<UserState>()
        .and_then(|state| state.session.logout_request())
    else {
        return Ok(());
    };

    let request_builder = user
        .get_request_builder(&GooseMethod::Post, LOGOUT_PATH)?
        .json(&request);
    let logout_request = GooseRequest::builder()
        .set_request_builder(request_builder)
        .build();
    user.request(logout_request).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_user_state_has_no_history() {
        let state = UserState::new(VirtualUserIdentity::from_index(1));
        assert_eq!(state.identity.username, "testuser1");
        assert!(!state.session.is_authenticated());
        assert_eq!(state.cycles.current(), 0);
    }
}
