#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod register_tests;

#[cfg(test)]
mod ticket_list_tests;

#[cfg(test)]
mod ticket_detail_tests;

#[cfg(test)]
mod ticket_create_tests;

#[cfg(test)]
mod session_guard_tests;
