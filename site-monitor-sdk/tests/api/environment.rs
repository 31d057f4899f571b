use laboratory::{SpecContext, Suite, describe, expect};

use site_monitor_corelib::err::ErrFetch;
use site_monitor_sdk::api::{
    STATUS_RUNNING,
    environment::{self, DEF_MN},
};

use super::{ID_EMPTY, ID_ERROR, ID_FAILED, ID_NULLS, ID_NUMERIC, STATE, new_client};
use crate::{TEST_BASE, TEST_OFFLINE_BASE, TestState};

pub fn suite() -> Suite<TestState> {
    describe("environment", |context| {
        context.it("get_latest_data() with defaults", test_latest_default);
        context.it("get_environment_data()", test_data);
        context.it("get_environment_data() with numeric fields", test_data_numeric);
        context.it("get_environment_data() with null envelope fields", test_data_nulls);
        context.it("get_environment_data() with reserved characters", test_data_encoded_mn);
        context.it("get_environment_data() fetch failed", test_data_fetch_failed);
        context.it("get_environment_data() device offline", test_data_offline);
    })
}

fn test_latest_default(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();

    runtime.block_on(async move {
        let client = new_client(TEST_BASE, None);
        let envelope = match environment::get_latest_data(&client, None).await {
            Err(e) => return Err(format!("get error: {}", e)),
            Ok(envelope) => envelope,
        };
        expect(envelope.success).to_equal(true)?;
        match envelope.data {
            None => Err("no data".to_string()),
            Some(data) => expect(data["mn"].as_str()).to_equal(Some(DEF_MN)),
        }
    })
}

fn test_data(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();

    runtime.block_on(async move {
        let client = new_client(TEST_BASE, None);
        let data = match environment::get_environment_data(&client, Some("point2")).await {
            Err(e) => return Err(format!("get error: {}", e)),
            Ok(data) => data,
        };
        expect(data.temperature.as_str()).to_equal("25.6")?;
        expect(data.humidity.as_str()).to_equal("60")?;
        expect(data.pressure.as_str()).to_equal("101.33")?;
        expect(data.wind_speed.as_str()).to_equal("3.1")?;
        expect(data.status.as_str()).to_equal(STATUS_RUNNING)?;
        expect(data.raw_data["mn"].as_str()).to_equal(Some("point2"))?;
        expect(data.raw_data["pm25"].as_u64()).to_equal(Some(35))?;
        expect(data.raw_data["noise"].as_str()).to_equal(Some("55.20"))
    })
}

fn test_data_numeric(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();

    runtime.block_on(async move {
        let client = new_client(TEST_BASE, None);
        let data = match environment::get_environment_data(&client, Some(ID_NUMERIC)).await {
            Err(e) => return Err(format!("get error: {}", e)),
            Ok(data) => data,
        };
        expect(data.temperature.as_str()).to_equal("25.6")?;
        expect(data.humidity.as_str()).to_equal("60")?;
        expect(data.pressure.as_str()).to_equal("101.33")?;
        expect(data.wind_speed.as_str()).to_equal("0")
    })
}

fn test_data_nulls(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();

    runtime.block_on(async move {
        let client = new_client(TEST_BASE, None);
        let envelope = match environment::get_latest_data(&client, Some(ID_NULLS)).await {
            Err(e) => return Err(format!("get error: {}", e)),
            Ok(envelope) => envelope,
        };
        expect(envelope.success).to_equal(true)?;
        expect(envelope.code).to_equal(0)?;
        expect(envelope.complex_data).to_equal(false)?;

        let data = match environment::get_environment_data(&client, Some(ID_NULLS)).await {
            Err(e) => return Err(format!("get error: {}", e)),
            Ok(data) => data,
        };
        expect(data.temperature.as_str()).to_equal("18.13")?;
        expect(data.humidity.as_str()).to_equal("0")?;
        expect(data.status.as_str()).to_equal(STATUS_RUNNING)
    })
}

fn test_data_encoded_mn(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();

    runtime.block_on(async move {
        let client = new_client(TEST_BASE, None);
        let mn = "GC/01?x=1#a b";
        let data = match environment::get_environment_data(&client, Some(mn)).await {
            Err(e) => return Err(format!("get error: {}", e)),
            Ok(data) => data,
        };
        expect(data.raw_data["mn"].as_str()).to_equal(Some(mn))
    })
}

fn test_data_fetch_failed(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();

    runtime.block_on(async move {
        let client = new_client(TEST_BASE, None);
        for mn in [ID_FAILED, ID_EMPTY] {
            match environment::get_environment_data(&client, Some(mn)).await {
                Err(e) => expect(e).to_equal(ErrFetch::FetchFailed)?,
                Ok(_) => return Err(format!("{} should fail", mn)),
            }
        }
        Ok(())
    })
}

fn test_data_offline(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();

    runtime.block_on(async move {
        let client = new_client(TEST_BASE, None);
        match environment::get_environment_data(&client, Some(ID_ERROR)).await {
            Err(e) => expect(e).to_equal(ErrFetch::Offline)?,
            Ok(_) => return Err("should be offline".to_string()),
        }

        let client = new_client(TEST_OFFLINE_BASE, None);
        match environment::get_environment_data(&client, None).await {
            Err(e) => expect(e).to_equal(ErrFetch::Offline),
            Ok(_) => Err("should be offline".to_string()),
        }
    })
}
