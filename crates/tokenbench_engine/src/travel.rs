use serde_json::{json, Value};

use crate::scenario::{IntentExchange, Operation, ScenarioProvider, ToolDefinition};

const TRADITIONAL_SYSTEM_PROMPT: &str = "You are a travel assistant with MCP tools.
1. Analyze which tools are needed
2. Call each tool sequentially
3. Process results and respond
Use JSON-RPC 2.0 format for tool calls.";

const CODE_EXECUTION_SYSTEM_PROMPT: &str = "You are a travel assistant using code execution paradigm.
Express intentions at high level. Infrastructure handles:
- Tool discovery and selection
- Parameter construction
- Batch execution
Focus on WHAT you need, not HOW to get it.";

const CAPABILITY_MANIFEST: &str = "## Capabilities
- travel.search: Search flights, hotels, transport
- travel.book: Create reservations
- info.weather: Weather forecasts
- calendar.availability: Check schedule
Priority hints: speed (0-1), quality (0-1), cost (0-1)";

/// Travel planning with five tools: flights, weather, hotels, calendar, booking.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelScenario;

impl TravelScenario {
    pub fn new() -> Self {
        Self
    }
}

impl ScenarioProvider for TravelScenario {
    fn name(&self) -> &str {
        "Travel Planning Assistant"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::search(
                "search_flights",
                json!({"origin": "JFK", "destination": "CDG",
                    "departure_date": "2024-03-15", "return_date": "2024-03-22", "passengers": 2}),
            ),
            Operation::search(
                "check_weather",
                json!({"location": "Paris, France", "units": "metric", "include_forecast": true}),
            ),
            Operation::search(
                "search_hotels",
                json!({"destination": "Paris", "check_in": "2024-03-15",
                    "check_out": "2024-03-22", "guests": 2, "min_stars": 3}),
            ),
            Operation::search(
                "check_calendar",
                json!({"start_date": "2024-03-15", "end_date": "2024-03-22",
                    "timezone": "America/New_York"}),
            ),
            Operation::booking(
                "create_booking",
                json!({"booking_type": "package", "item_id": "PKG-12345",
                    "passengers": [{"first_name": "John", "last_name": "Doe"},
                                   {"first_name": "Jane", "last_name": "Doe"}],
                    "contact_email": "john.doe@email.com", "payment_method": "credit_card"}),
            ),
        ]
    }

    fn tools(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition::new(
                "search_flights",
                "Search for available flights between airports on specified dates.",
                json!({"type": "object", "required": ["origin", "destination", "departure_date"],
                    "properties": {"origin": {"type": "string"}, "destination": {"type": "string"},
                        "departure_date": {"type": "string", "format": "date"},
                        "return_date": {"type": "string"},
                        "passengers": {"type": "integer", "default": 1},
                        "cabin_class": {"type": "string", "enum": ["economy", "business", "first"]},
                        "max_stops": {"type": "integer"}, "sort_by": {"type": "string"}}}),
            ),
            ToolDefinition::new(
                "check_weather",
                "Get current weather and forecast for a location.",
                json!({"type": "object", "required": ["location"],
                    "properties": {"location": {"type": "string"},
                        "units": {"type": "string", "enum": ["metric", "imperial"]},
                        "include_forecast": {"type": "boolean"},
                        "include_hourly": {"type": "boolean"}}}),
            ),
            ToolDefinition::new(
                "search_hotels",
                "Search for available hotels in a destination.",
                json!({"type": "object", "required": ["destination", "check_in", "check_out"],
                    "properties": {"destination": {"type": "string"}, "check_in": {"type": "string"},
                        "check_out": {"type": "string"}, "guests": {"type": "integer"},
                        "min_stars": {"type": "integer"}, "max_price": {"type": "number"},
                        "amenities": {"type": "array", "items": {"type": "string"}}}}),
            ),
            ToolDefinition::new(
                "check_calendar",
                "Check calendar availability for date ranges.",
                json!({"type": "object", "required": ["start_date", "end_date"],
                    "properties": {"start_date": {"type": "string"}, "end_date": {"type": "string"},
                        "calendars": {"type": "array"}, "timezone": {"type": "string"},
                        "min_duration_minutes": {"type": "integer"}}}),
            ),
            ToolDefinition::new(
                "create_booking",
                "Create a booking for flight, hotel, or travel package.",
                json!({"type": "object",
                    "required": ["booking_type", "item_id", "passengers", "contact_email", "payment_method"],
                    "properties": {
                        "booking_type": {"type": "string", "enum": ["flight", "hotel", "package"]},
                        "item_id": {"type": "string"},
                        "passengers": {"type": "array", "items": {"type": "object"}},
                        "contact_email": {"type": "string"}, "payment_method": {"type": "string"},
                        "special_requests": {"type": "string"},
                        "add_to_calendar": {"type": "boolean"}}}),
            ),
        ]
    }

    fn mock_response(&self, tool: &str) -> Value {
        match tool {
            "search_flights" => json!({"flights": [
                {"id": "FL-AA123", "airline": "American Airlines", "price": 450.00,
                    "stops": 0, "duration_minutes": 210},
                {"id": "FL-UA456", "airline": "United Airlines", "price": 385.00,
                    "stops": 1, "duration_minutes": 270}
            ], "total_results": 2}),
            "check_weather" => json!({"location": "Paris, France",
                "current": {"temperature": 18, "humidity": 65, "conditions": "Partly Cloudy"},
                "forecast": [{"date": "2024-03-15", "high": 20, "low": 12, "conditions": "Sunny"}]}),
            "search_hotels" => json!({"hotels": [
                {"id": "HTL-001", "name": "Grand Hotel Paris", "stars": 4, "rating": 8.7,
                    "price_per_night": 220.00},
                {"id": "HTL-002", "name": "Boutique Montmartre", "stars": 3, "rating": 9.1,
                    "price_per_night": 150.00}
            ], "total_results": 2}),
            "check_calendar" => json!({
                "busy_slots": [{"start": "2024-03-15T09:00:00Z", "end": "2024-03-15T10:00:00Z",
                    "event": "Team Meeting"}],
                "free_slots": [{"start": "2024-03-15T10:00:00Z", "end": "2024-03-15T17:00:00Z"}]}),
            "create_booking" => json!({"booking_id": "BK-2024-12345", "status": "confirmed",
                "total_amount": 835.00}),
            _ => json!({"status": "success"}),
        }
    }

    fn traditional_system_prompt(&self) -> &str {
        TRADITIONAL_SYSTEM_PROMPT
    }

    fn code_execution_system_prompt(&self) -> &str {
        CODE_EXECUTION_SYSTEM_PROMPT
    }

    fn capability_manifest(&self) -> &str {
        CAPABILITY_MANIFEST
    }

    fn batch_exchange(&self, _searches: &[Operation]) -> IntentExchange {
        IntentExchange {
            reasoning: "Requesting aggregated travel analysis. System handles tool execution."
                .to_string(),
            request: json!({"intent": "travel_planning", "requirements": [
                {"type": "flights", "from": "JFK", "to": "CDG", "dates": "2024-03-15 to 2024-03-22"},
                {"type": "weather", "location": "Paris"},
                {"type": "hotels", "location": "Paris", "dates": "same"},
                {"type": "calendar", "check": "conflicts"}
            ], "priorities": {"speed": 0.6, "quality": 0.8, "cost": 0.7}}),
            response: json!({"status": "complete", "results": {
                "flight_options": 2, "best_flight": {"price": 385, "airline": "United"},
                "weather_summary": "Mild, 15-20°C, some rain expected",
                "hotel_options": 2,
                "recommended_hotel": {"name": "Boutique Montmartre", "price": 150},
                "calendar_status": "Available with 2 minor conflicts",
                "total_estimated_cost": 1785
            }, "recommendations": ["Book United flight", "Boutique Montmartre highly rated"]}),
        }
    }

    fn booking_exchange(&self, _booking: &Operation) -> IntentExchange {
        IntentExchange {
            reasoning: "Proceeding with booking.".to_string(),
            request: json!({"action": "book",
                "selections": {"flight": "FL-UA456", "hotel": "HTL-002"}, "passengers": 2}),
            response: json!({"status": "confirmed", "booking_ref": "BK-2024-12345",
                "total": 835.00}),
        }
    }
}
