use actix_web::web;

use crate::handlers;

/// Wire every route under its resource scope. The route table mirrors the
/// public API: `/health` plus `/api/{auth,users,destinations,hotels,
/// bookings,trip-bookings}`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health::health_check)
        .service(
            web::scope("/api/auth")
                .service(handlers::auth_handler::register)
                .service(handlers::auth_handler::login),
        )
        .service(
            web::scope("/api/users")
                .service(handlers::user_handler::get_me)
                .service(handlers::user_handler::update_me),
        )
        .service(
            web::scope("/api/destinations")
                .service(handlers::destination_handler::list_destinations)
                .service(handlers::destination_handler::get_destination)
                .service(handlers::destination_handler::create_destination),
        )
        .service(
            web::scope("/api/hotels")
                .service(handlers::hotel_handler::list_hotels)
                .service(handlers::hotel_handler::get_hotel)
                .service(handlers::hotel_handler::create_hotel),
        )
        .service(
            web::scope("/api/bookings")
                .service(handlers::booking_handler::list_bookings)
                .service(handlers::booking_handler::create_booking),
        )
        .service(
            web::scope("/api/trip-bookings")
                .service(handlers::trip_booking_handler::create_trip_booking)
                .service(handlers::trip_booking_handler::list_trip_bookings)
                // Registered before the id matcher so "history" is not
                // parsed as a booking id.
                .service(handlers::trip_booking_handler::trip_history)
                .service(handlers::trip_booking_handler::get_trip_booking)
                .service(handlers::trip_booking_handler::leave_feedback),
        );
}
