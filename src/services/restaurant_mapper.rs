//! Field-by-field conversion between the wire DTO and the persisted entity

use crate::api::dto::RestaurantDto;
use crate::domain::{Restaurant, RestaurantId};

/// Convert a persisted restaurant to its wire form
pub fn to_dto(restaurant: Restaurant) -> RestaurantDto {
    RestaurantDto {
        id: restaurant.id.map(RestaurantId::get),
        name: restaurant.name,
        address: restaurant.address,
        city: restaurant.city,
        description: restaurant.description,
    }
}

/// Convert a wire DTO to the persisted shape
pub fn to_entity(dto: RestaurantDto) -> Restaurant {
    Restaurant {
        id: dto.id.map(RestaurantId::new),
        name: dto.name,
        address: dto.address,
        city: dto.city,
        description: dto.description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_to_dto_copies_every_field() {
        let entity = Restaurant::new("Restaurant 1", "Address 1", "city 1", "Desc 1")
            .with_id(RestaurantId::new(1));

        let dto = to_dto(entity.clone());
        assert_eq!(dto.id, Some(1));
        assert_eq!(dto.name, entity.name);
        assert_eq!(dto.address, entity.address);
        assert_eq!(dto.city, entity.city);
        assert_eq!(dto.description, entity.description);

        assert_eq!(to_entity(dto), entity);
    }

    #[test]
    fn unsaved_entity_keeps_missing_id() {
        let entity = Restaurant::new("Restaurant 2", "Address 2", "city 2", "Desc 2");
        let dto = to_dto(entity.clone());

        assert_eq!(dto.id, None);
        assert_eq!(to_entity(dto), entity);
    }
}
