#[cfg(test)]
mod faults;
#[cfg(test)]
mod handle_rtml;
#[cfg(test)]
mod ping;

#[cfg(test)]
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
